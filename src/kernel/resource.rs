use std::fmt;

/// Identifies the resource a log tab shows.
///
/// The tab id is `group` for a log group and `group/stream` for a log stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceKey {
    Group { group: String },
    Stream { group: String, stream: String },
}

impl ResourceKey {
    pub fn group(group: impl Into<String>) -> Self {
        Self::Group {
            group: group.into(),
        }
    }

    pub fn stream(group: impl Into<String>, stream: impl Into<String>) -> Self {
        Self::Stream {
            group: group.into(),
            stream: stream.into(),
        }
    }

    pub fn id(&self) -> String {
        self.to_string()
    }

    pub fn group_name(&self) -> &str {
        match self {
            Self::Group { group } | Self::Stream { group, .. } => group,
        }
    }

    pub fn stream_name(&self) -> Option<&str> {
        match self {
            Self::Group { .. } => None,
            Self::Stream { stream, .. } => Some(stream),
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group { group } => f.write_str(group),
            Self::Stream { group, stream } => write!(f, "{}/{}", group, stream),
        }
    }
}

/// Parameters of a log stream view. Two requests for the same stream may
/// differ in everything except the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamRequest {
    pub group: String,
    pub stream: String,
    /// Start at the oldest events instead of the newest.
    pub from_head: bool,
    /// Center of the time window, epoch millis.
    pub start_time: Option<i64>,
    /// Half-width of the time window around `start_time`, millis.
    pub time_scale: Option<i64>,
}

impl StreamRequest {
    pub fn new(group: impl Into<String>, stream: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            stream: stream.into(),
            from_head: true,
            start_time: None,
            time_scale: None,
        }
    }

    pub fn from_head(mut self, from_head: bool) -> Self {
        self.from_head = from_head;
        self
    }

    pub fn around(mut self, start_time: i64, time_scale: i64) -> Self {
        self.start_time = Some(start_time);
        self.time_scale = Some(time_scale);
        self
    }

    pub fn key(&self) -> ResourceKey {
        ResourceKey::stream(self.group.clone(), self.stream.clone())
    }
}

/// What a log window is asked to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    Group { group: String },
    Stream(StreamRequest),
}

impl ViewRequest {
    pub fn key(&self) -> ResourceKey {
        match self {
            Self::Group { group } => ResourceKey::group(group.clone()),
            Self::Stream(req) => req.key(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/resource.rs"]
mod tests;
