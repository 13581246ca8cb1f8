//! Calculator defaults - slowest/fastest belt and pipe

use crate::lab::Defaults;
use crate::slug::entity_id_to_slug;
use crate::source::{TransportsDocument, number_or_zero};

/// Build the defaults block.
///
/// Belts are only the flat conveyors; U-shape and loose-material conveyors
/// are excluded. Each candidate list is stable-sorted by throughput and the
/// ends become min/max.
#[must_use]
pub fn build_defaults(transports: Option<&TransportsDocument>) -> Defaults {
    let mut belts: Vec<(String, f64)> = Vec::new();
    let mut pipes: Vec<(String, f64)> = Vec::new();

    for transport in transports.map(|t| t.transports.as_slice()).unwrap_or_default() {
        let id = transport.id.to_lowercase();
        let candidate = (
            entity_id_to_slug(&transport.id),
            number_or_zero(transport.throughput_per_second.as_ref()),
        );
        if id.contains("flatconveyor") {
            belts.push(candidate);
        } else if id.contains("pipe") {
            pipes.push(candidate);
        }
    }

    let (min_belt, max_belt) = extremes(belts);
    let (min_pipe, max_pipe) = extremes(pipes);

    Defaults {
        min_belt,
        max_belt,
        min_pipe,
        max_pipe,
        ..Defaults::default()
    }
}

fn extremes(mut candidates: Vec<(String, f64)>) -> (Option<String>, Option<String>) {
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
    let min = candidates.first().map(|(slug, _)| slug.clone());
    let max = candidates.last().map(|(slug, _)| slug.clone());
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::TransportRecord;
    use serde_json::Number;

    fn transport(id: &str, throughput: i64) -> TransportRecord {
        TransportRecord {
            id: id.to_string(),
            name: id.to_string(),
            icon_path: String::new(),
            throughput_per_second: Some(Number::from(throughput)),
        }
    }

    #[test]
    fn test_only_flat_conveyors_are_belts() {
        let doc = TransportsDocument {
            transports: vec![
                transport("FlatConveyorT2", 40),
                transport("LooseMaterialConveyorT1", 5),
                transport("FlatConveyorT1", 20),
                transport("UShapeConveyorT3", 500),
                transport("FlatConveyorT3", 80),
                transport("PipeT2", 30),
                transport("PipeT1", 10),
            ],
        };
        let defaults = build_defaults(Some(&doc));
        assert_eq!(defaults.min_belt.as_deref(), Some("flat-conveyor-t1"));
        assert_eq!(defaults.max_belt.as_deref(), Some("flat-conveyor-t3"));
        assert_eq!(defaults.min_pipe.as_deref(), Some("pipe-t1"));
        assert_eq!(defaults.max_pipe.as_deref(), Some("pipe-t2"));
    }

    #[test]
    fn test_no_transports() {
        let defaults = build_defaults(None);
        assert_eq!(defaults, Defaults::default());
        assert!(defaults.min_belt.is_none() && defaults.max_pipe.is_none());
    }

    #[test]
    fn test_single_belt_is_min_and_max() {
        let doc = TransportsDocument {
            transports: vec![transport("FlatConveyor", 20)],
        };
        let defaults = build_defaults(Some(&doc));
        assert_eq!(defaults.min_belt, defaults.max_belt);
        assert_eq!(defaults.min_belt.as_deref(), Some("flat-conveyor"));
    }
}
