use crate::database::StandingsRow;
use crate::domain::Pairing;

/// Pairs adjacent entries of a ranked sequence: positions 0 and 1, 2 and 3,
/// and so on. With standings input this matches each player against the
/// nearest neighbor by win record, the greedy Swiss approximation. It does
/// not avoid rematches.
///
/// A trailing unpaired entry (odd count) is dropped; no bye is issued.
/// Known limitation of the pairing scheme, kept deliberately.
pub fn pair_adjacent(ranked: &[StandingsRow]) -> Vec<Pairing> {
    ranked
        .chunks_exact(2)
        .map(|pair| Pairing {
            first_id: pair[0].id,
            first_name: pair[0].name.clone(),
            second_id: pair[1].id,
            second_name: pair[1].name.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i32, name: &str, wins: i32, losses: i32) -> StandingsRow {
        StandingsRow {
            id,
            name: name.to_string(),
            wins,
            losses,
        }
    }

    #[test]
    fn test_empty_input_yields_no_pairings() {
        assert!(pair_adjacent(&[]).is_empty());
    }

    #[test]
    fn test_single_entry_yields_no_pairings() {
        let ranked = vec![row(1, "Ada", 0, 0)];
        assert!(pair_adjacent(&ranked).is_empty());
    }

    #[test]
    fn test_even_count_pairs_in_rank_order() {
        let ranked = vec![
            row(3, "Ada", 2, 0),
            row(1, "Grace", 2, 1),
            row(4, "Edsger", 1, 2),
            row(2, "Alan", 0, 2),
        ];

        let pairings = pair_adjacent(&ranked);

        assert_eq!(pairings.len(), 2);
        assert_eq!((pairings[0].first_id, pairings[0].second_id), (3, 1));
        assert_eq!((pairings[1].first_id, pairings[1].second_id), (4, 2));
        assert_eq!(pairings[0].first_name, "Ada");
        assert_eq!(pairings[1].second_name, "Alan");
    }

    #[test]
    fn test_odd_count_drops_last_entry() {
        let ranked = vec![
            row(1, "Ada", 1, 0),
            row(2, "Grace", 1, 1),
            row(3, "Alan", 0, 1),
        ];

        let pairings = pair_adjacent(&ranked);

        assert_eq!(pairings.len(), 1);
        assert_eq!((pairings[0].first_id, pairings[0].second_id), (1, 2));
    }

    #[test]
    fn test_each_entry_appears_at_most_once() {
        let ranked: Vec<StandingsRow> =
            (1..=6).map(|id| row(id, &format!("P{id}"), 0, 0)).collect();

        let pairings = pair_adjacent(&ranked);

        let mut seen: Vec<i32> = pairings
            .iter()
            .flat_map(|p| [p.first_id, p.second_id])
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 6);
    }
}
