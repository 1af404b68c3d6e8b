/// Remote data held by a view: still loading, loaded, or failed with the
/// message to show.
#[derive(Debug, Clone, PartialEq)]
pub enum Resource<T> {
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> Resource<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_loading() {
        let resource: Resource<Vec<u32>> = Resource::default();
        assert!(resource.is_loading());
        assert!(resource.ready().is_none());
    }

    #[test]
    fn accessors() {
        let ready = Resource::Ready(3);
        assert_eq!(ready.ready(), Some(&3));
        let failed: Resource<u32> = Resource::Failed("Pokemon not found".to_string());
        assert_eq!(failed.error(), Some("Pokemon not found"));
    }
}
