use itertools::Itertools;
use std::collections::{HashMap, HashSet, VecDeque};
use stoplink_core::model::network::{Link, LinkId, Network};

use super::NearLink;

/// reduces links in sequence (single file links) to the link closest to the
/// query location. this removes candidates that would lead a router along the
/// same path.
///
/// two links are in sequence when the first ends at the node where the second
/// starts and that node is a pass-through: ignoring links running in the
/// opposite direction, the node has exactly one incoming and one outgoing link.
/// each chain of sequenced candidates keeps only its closest link, with link id
/// as tie-breaker. the order of the remaining links is unchanged.
///
/// # Arguments
///
/// * `links`   - links found near a location, with their distances to it
/// * `network` - network the links belong to
///
/// # Returns
///
/// * the links without the sequenced duplicates
pub fn reduce_sequenced_links(links: Vec<NearLink>, network: &Network) -> Vec<NearLink> {
    let positions: HashMap<&LinkId, usize> = links
        .iter()
        .enumerate()
        .map(|(idx, near)| (&near.link_id, idx))
        .collect();

    // undirected adjacency between candidates that are in sequence
    let mut adjacency: HashMap<usize, Vec<usize>> = HashMap::new();
    for (idx, near) in links.iter().enumerate() {
        let successor = network
            .get_link(&near.link_id)
            .and_then(|link| single_file_successor(link, network))
            .and_then(|next| positions.get(&next.id).copied())
            .filter(|next_idx| *next_idx != idx);
        if let Some(next_idx) = successor {
            adjacency.entry(idx).or_default().push(next_idx);
            adjacency.entry(next_idx).or_default().push(idx);
        }
    }

    let mut keep: HashSet<usize> = HashSet::new();
    let mut visited: HashSet<usize> = HashSet::new();
    for idx in 0..links.len() {
        if visited.contains(&idx) {
            continue;
        }
        let chain = chain_from(idx, &adjacency, &mut visited);
        let closest = chain.into_iter().min_by(|a, b| {
            links[*a]
                .distance
                .total_cmp(&links[*b].distance)
                .then_with(|| links[*a].link_id.cmp(&links[*b].link_id))
        });
        if let Some(closest) = closest {
            keep.insert(closest);
        }
    }

    links
        .into_iter()
        .enumerate()
        .filter(|(idx, _)| keep.contains(idx))
        .map(|(_, near)| near)
        .collect_vec()
}

/// the link continuing `link` through a pass-through node, if any.
fn single_file_successor<'a>(link: &Link, network: &'a Network) -> Option<&'a Link> {
    let node_id = &link.to_node_id;
    let outgoing = network
        .out_links(node_id)
        .iter()
        .filter_map(|id| network.get_link(id))
        .filter(|out| !out.is_reverse_of(link))
        .collect_vec();
    let [next] = outgoing.as_slice() else {
        return None;
    };
    let incoming = network
        .in_links(node_id)
        .iter()
        .filter_map(|id| network.get_link(id))
        .filter(|inc| !inc.is_reverse_of(next))
        .count();
    if incoming == 1 {
        Some(*next)
    } else {
        None
    }
}

/// breadth-first search collecting all candidates connected to `src`.
fn chain_from(
    src: usize,
    adjacency: &HashMap<usize, Vec<usize>>,
    visited: &mut HashSet<usize>,
) -> Vec<usize> {
    let mut chain = vec![];
    let mut frontier: VecDeque<usize> = VecDeque::from([src]);
    visited.insert(src);
    while let Some(next) = frontier.pop_front() {
        chain.push(next);
        for neighbor in adjacency.get(&next).into_iter().flatten() {
            if visited.insert(*neighbor) {
                frontier.push_back(*neighbor);
            }
        }
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::reduce_sequenced_links;
    use crate::algorithm::link_search::NearLink;
    use geo::Coord;
    use itertools::Itertools;
    use std::collections::BTreeSet;
    use stoplink_core::model::network::{Link, Network, Node};

    fn node(id: &str, x: f64, y: f64) -> Node {
        Node::new(id.into(), Coord { x, y })
    }

    fn link(id: &str, src: &str, dst: &str) -> Link {
        Link::new(id.into(), src.into(), dst.into(), 50.0, 10.0, BTreeSet::new())
    }

    fn near(id: &str, distance: f64) -> NearLink {
        NearLink::new(id.into(), distance)
    }

    fn reduced_ids(links: Vec<NearLink>, network: &Network) -> Vec<String> {
        reduce_sequenced_links(links, network)
            .into_iter()
            .map(|n| n.link_id.0)
            .collect_vec()
    }

    /// a straight line of nodes n0..n3 with links A, B, C and optional reverse links.
    fn straight_chain(two_way: bool) -> Network {
        let nodes = vec![
            node("n0", 0.0, 10.0),
            node("n1", 50.0, 10.0),
            node("n2", 100.0, 10.0),
            node("n3", 150.0, 10.0),
        ];
        let mut links = vec![link("A", "n0", "n1"), link("B", "n1", "n2"), link("C", "n2", "n3")];
        if two_way {
            links.extend([link("Cr", "n3", "n2"), link("Br", "n2", "n1"), link("Ar", "n1", "n0")]);
        }
        Network::new(nodes, links).expect("test invariant failed: invalid network")
    }

    #[test]
    fn test_straight_chain_reduces_to_closest() {
        let network = straight_chain(false);
        let links = vec![near("B", 10.0), near("A", 12.0), near("C", 12.0)];
        assert_eq!(reduced_ids(links, &network), vec!["B"]);
    }

    #[test]
    fn test_two_way_chain_keeps_one_per_direction() {
        let network = straight_chain(true);
        let links = vec![
            near("B", 10.0),
            near("Br", 10.0),
            near("A", 12.0),
            near("Ar", 12.0),
            near("C", 12.0),
            near("Cr", 12.0),
        ];
        assert_eq!(reduced_ids(links, &network), vec!["B", "Br"]);
    }

    #[test]
    fn test_branching_node_breaks_sequence() {
        let mut network = straight_chain(false);
        network
            .add_node(node("side", 50.0, 60.0))
            .expect("test invariant failed");
        network
            .add_link(link("S", "n1", "side"))
            .expect("test invariant failed");
        // n1 now has two outgoing links, so A and B are no longer in sequence
        let links = vec![near("B", 10.0), near("A", 12.0), near("S", 40.0)];
        assert_eq!(reduced_ids(links, &network), vec!["B", "A", "S"]);
    }

    #[test]
    fn test_gap_in_candidates_splits_chain() {
        let network = straight_chain(false);
        // B is not a candidate, so A and C are not connected through candidates
        let links = vec![near("A", 12.0), near("C", 12.0)];
        assert_eq!(reduced_ids(links, &network), vec!["A", "C"]);
    }
}
