//! Navigation state machine of the task detail page.
//!
//! Each navigation moves the page to `Loading` and hands out a ticket. A
//! result is applied only with the ticket of the latest navigation, so a
//! response that arrives after the user moved on is dropped without touching
//! the page.

use super::{TaskDetailError, TaskDetailResult, TaskDetailService};
use crate::allocation::{
    domain::{TaskDetailView, TaskRoute},
    ports::AllocationSource,
};
use tracing::debug;

/// Tag identifying one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTicket {
    generation: u64,
    route: TaskRoute,
}

impl NavigationTicket {
    /// Returns the route the navigation targets.
    #[must_use]
    pub const fn route(&self) -> &TaskRoute {
        &self.route
    }

    /// Returns the navigation's sequence number.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Page state for the current navigation.
#[derive(Debug, Clone)]
pub enum ViewState {
    /// No navigation has started.
    Idle,
    /// The allocation fetch is in flight.
    Loading {
        /// Requested route.
        route: TaskRoute,
    },
    /// Resolution failed; the route is kept as requested.
    Error {
        /// Requested route.
        route: TaskRoute,
        /// Classified failure.
        error: TaskDetailError,
    },
    /// The view-model is ready.
    Ready {
        /// Requested route.
        route: TaskRoute,
        /// Assembled view-model.
        view: Box<TaskDetailView>,
    },
}

impl ViewState {
    /// Returns the route of the current navigation, if any.
    #[must_use]
    pub const fn route(&self) -> Option<&TaskRoute> {
        match self {
            Self::Idle => None,
            Self::Loading { route } | Self::Error { route, .. } | Self::Ready { route, .. } => {
                Some(route)
            }
        }
    }

    /// Returns the error of a failed navigation.
    #[must_use]
    pub const fn error(&self) -> Option<&TaskDetailError> {
        match self {
            Self::Error { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns the view-model of a completed navigation.
    #[must_use]
    pub fn view(&self) -> Option<&TaskDetailView> {
        match self {
            Self::Ready { view, .. } => Some(view.as_ref()),
            _ => None,
        }
    }

    /// Returns whether the fetch is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// Page session tracking the latest navigation.
pub struct TaskDetailSession<S>
where
    S: AllocationSource,
{
    service: TaskDetailService<S>,
    generation: u64,
    state: ViewState,
}

impl<S> TaskDetailSession<S>
where
    S: AllocationSource,
{
    /// Creates an idle session.
    #[must_use]
    pub const fn new(service: TaskDetailService<S>) -> Self {
        Self {
            service,
            generation: 0,
            state: ViewState::Idle,
        }
    }

    /// Returns the current page state.
    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the URL of the current navigation.
    ///
    /// Failed navigations keep the requested URL; there is no redirect.
    #[must_use]
    pub fn current_url(&self) -> Option<String> {
        self.state.route().map(TaskRoute::path)
    }

    /// Starts a navigation, superseding any in-flight one.
    pub fn begin(&mut self, route: TaskRoute) -> NavigationTicket {
        self.generation = self.generation.wrapping_add(1);
        self.state = ViewState::Loading {
            route: route.clone(),
        };
        NavigationTicket {
            generation: self.generation,
            route,
        }
    }

    /// Fetches and assembles the view-model for a ticket without touching
    /// the page state.
    ///
    /// # Errors
    ///
    /// Returns the assembler's [`TaskDetailError`].
    pub async fn load(&self, ticket: &NavigationTicket) -> TaskDetailResult<TaskDetailView> {
        self.service.assemble(ticket.route()).await
    }

    /// Applies a result if its ticket belongs to the latest navigation.
    ///
    /// Returns `false` and leaves the state untouched for stale tickets.
    pub fn complete(
        &mut self,
        ticket: NavigationTicket,
        result: TaskDetailResult<TaskDetailView>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale_route = %ticket.route,
                "discarding response for superseded navigation"
            );
            return false;
        }

        let route = ticket.route;
        self.state = match result {
            Ok(view) => ViewState::Ready {
                route,
                view: Box::new(view),
            },
            Err(error) => ViewState::Error { route, error },
        };
        true
    }

    /// Runs one navigation to completion.
    pub async fn visit(&mut self, route: TaskRoute) -> &ViewState {
        let ticket = self.begin(route);
        let result = self.load(&ticket).await;
        self.complete(ticket, result);
        &self.state
    }
}
