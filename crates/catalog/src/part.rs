use serde::{Deserialize, Serialize};

use velokit_core::{Entity, PartId};

/// A configurable slot on a product (e.g. "Frame Type").
///
/// Read-only catalog data: the customization session never mutates parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    description: String,
    /// Catalog display price in the smallest currency unit (e.g. cents).
    ///
    /// Not a term of `Product::current_total_price`: pricing lives on the
    /// choices and on price constraints, never on the part slot itself.
    price: i64,
}

impl Part {
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
        }
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> i64 {
        self.price
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> PartId {
        self.id
    }
}

/// Ordered, id-indexed collection of parts.
///
/// Iteration order is construction order; lookups go by `PartId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parts(Vec<Part>);

impl Parts {
    pub fn new(parts: Vec<Part>) -> Self {
        Self(parts)
    }

    /// Returns the matching part or `None`.
    pub fn find_by_id(&self, id: PartId) -> Option<&Part> {
        self.0.iter().find(|part| part.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Part> for Parts {
    fn from_iter<I: IntoIterator<Item = Part>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_type() -> Part {
        Part::new(PartId::new(1), "Frame Type", "Diamond or step-through", 0)
    }

    #[test]
    fn find_by_id_returns_the_matching_part() {
        let parts = Parts::new(vec![
            frame_type(),
            Part::new(PartId::new(2), "Wheels", "Road or mountain", 0),
        ]);

        let part = parts.find_by_id(PartId::new(2)).unwrap();
        assert_eq!(part.name(), "Wheels");
    }

    #[test]
    fn find_by_id_is_absent_for_unknown_id() {
        let parts = Parts::new(vec![frame_type()]);
        assert!(parts.find_by_id(PartId::new(99)).is_none());
    }

    #[test]
    fn iteration_preserves_construction_order() {
        let parts: Parts = (1..=3)
            .map(|n| Part::new(PartId::new(n), format!("Part {n}"), "", 0))
            .collect();

        let ids: Vec<u64> = parts.iter().map(|p| p.id().value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
