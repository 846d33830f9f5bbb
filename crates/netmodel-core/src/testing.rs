use crate::network::types::Edge;
use crate::network::Topology;

/// A ring of `n` nodes named `"0"` to `"n-1"`, every edge with capacity 100.
pub(crate) fn ring(n: usize, directed: bool) -> Topology {
    let mut topo = Topology::with_direction(directed);
    for i in 0..n {
        topo.add_edge(
            i.to_string(),
            ((i + 1) % n).to_string(),
            Edge::new().with_capacity(100.0),
        );
    }
    topo
}

/// Two hosts attached to a switch with asymmetric link weights.
pub(crate) fn two_hop_config() -> Topology {
    let mut topo = Topology::new();
    topo.add_edge("h1", "s1", Edge::new().with_weight(1.0).with_delay(2.0));
    topo.add_edge("s1", "h2", Edge::new().with_weight(4.0).with_delay(3.0));
    topo.add_edge("h1", "h2", Edge::new().with_weight(10.0).with_delay(1.0));
    topo
}
