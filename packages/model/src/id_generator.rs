use uuid::Uuid;

/// Source of opaque node identifiers
///
/// Sections and elements are only ever created through an `IdSource`, so a
/// document never sees the same id twice.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Globally unique random ids (UUID v4)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Sequential ids sharing a seed: `{seed}-1`, `{seed}-2`, …
///
/// Reproducible, so fixtures and snapshot tests can predict every id.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    seed: String,
    count: u32,
}

impl SequentialIdSource {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIdSource::new("page");

        assert_eq!(ids.next_id(), "page-1");
        assert_eq!(ids.next_id(), "page-2");
        assert_eq!(ids.next_id(), "page-3");
        assert_eq!(ids.seed(), "page");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidIdSource;
        let minted: HashSet<String> = (0..100).map(|_| ids.next_id()).collect();
        assert_eq!(minted.len(), 100);
    }
}
