//! Tri-state wrapper around an asynchronous fetch outcome.

use crate::error::LoadError;

/// Outcome of an asynchronous fetch, as a screen renders it.
///
/// Exactly one variant is active at a time. A producer publishes `Loading`
/// the moment it starts a fetch and replaces the value wholesale with
/// exactly one terminal variant when the fetch settles. Consumers must
/// render all three variants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Resource<T> {
    /// Fetch in flight; nothing to render yet.
    #[default]
    Loading,
    /// Fetch settled with a payload. List payloads represent absence as an
    /// empty collection, never a missing one.
    Success { data: T },
    /// Fetch settled with an error to render verbatim.
    Failure { error: LoadError },
}

impl<T> Resource<T> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Payload of a successful fetch.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success { data } => Some(data),
            _ => None,
        }
    }

    /// Error of a failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failure { error } => Some(error),
            _ => None,
        }
    }

    /// Transform the payload of `Success`; `Loading` and `Failure` pass
    /// through with the tag preserved.
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Resource<U> {
        match self {
            Self::Loading => Resource::Loading,
            Self::Success { data } => Resource::Success {
                data: transform(data),
            },
            Self::Failure { error } => Resource::Failure { error },
        }
    }
}

impl<T> Resource<Vec<T>> {
    /// Whether the fetch succeeded but returned no items.
    ///
    /// Screens use this to tell "loaded, nothing to show" apart from
    /// "still loading". Always an emptiness check on the payload, never
    /// equality against an empty literal.
    #[must_use]
    pub fn is_empty_success(&self) -> bool {
        matches!(self, Self::Success { data } if data.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn variants() -> [Resource<Vec<u32>>; 3] {
        [
            Resource::Loading,
            Resource::Success { data: vec![1, 2] },
            Resource::Failure {
                error: LoadError::new("boom"),
            },
        ]
    }

    #[test]
    fn exactly_one_predicate_holds_per_variant() {
        for resource in variants() {
            let flags = [
                resource.is_loading(),
                resource.is_success(),
                resource.is_failure(),
            ];
            assert_eq!(flags.iter().filter(|flag| **flag).count(), 1);
        }
    }

    #[test]
    fn default_is_loading() {
        assert!(Resource::<Vec<u32>>::default().is_loading());
    }

    #[test]
    fn map_transforms_success_payload() {
        let doubled = Resource::Success { data: vec![1, 2] }.map(|data: Vec<u32>| {
            data.into_iter().map(|value| value * 2).collect::<Vec<_>>()
        });
        assert_eq!(doubled, Resource::Success { data: vec![2, 4] });
    }

    #[test]
    fn map_passes_loading_and_failure_through() {
        let loading: Resource<u32> = Resource::Loading;
        assert!(loading.map(|value| value + 1).is_loading());

        let failure: Resource<u32> = Resource::Failure {
            error: LoadError::new("boom"),
        };
        let mapped = failure.map(|value| value + 1);
        assert_eq!(mapped.error().map(LoadError::display_message), Some("boom"));
    }

    #[test]
    fn empty_success_is_not_loading() {
        let empty: Resource<Vec<u32>> = Resource::Success { data: Vec::new() };
        assert!(empty.is_empty_success());
        assert!(!empty.is_loading());

        let loading: Resource<Vec<u32>> = Resource::Loading;
        assert!(!loading.is_empty_success());

        let full = Resource::Success { data: vec![7] };
        assert!(!full.is_empty_success());
    }
}
