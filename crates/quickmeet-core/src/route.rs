//! Navigation routes.

use std::{fmt, str::FromStr};

use crate::{error::RouteError, meeting_id::MeetingId};

const MEETING_PREFIX: &str = "/meeting/";

/// A logical screen location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Landing screen at `/`.
    Landing,
    /// Meeting screen at `/meeting/<id>`.
    Meeting(MeetingId),
}

impl Route {
    /// Path form of the route.
    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_owned(),
            Route::Meeting(id) => format!("{MEETING_PREFIX}{id}"),
        }
    }

    /// Meeting identifier carried by the route. `None` for the landing route.
    pub fn meeting_id(&self) -> Option<&MeetingId> {
        match self {
            Route::Landing => None,
            Route::Meeting(id) => Some(id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        if path == "/" {
            return Ok(Route::Landing);
        }

        let raw_id = path
            .strip_prefix(MEETING_PREFIX)
            .ok_or_else(|| RouteError::UnknownPath(path.to_owned()))?;

        MeetingId::from_input(raw_id).map(Route::Meeting).ok_or(RouteError::EmptyMeetingId)
    }
}
