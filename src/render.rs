use crate::graph::{Edge, Graph, Node};
use crate::{City, CityMapError};
use num_traits::PrimInt;
use std::io::{self, Write};

/// A display surface for a graph. Implementations decide how nodes and edges look; the
/// graph only tells them what to draw and which parts belong to the spanning tree.
pub trait GraphRenderer<T, W> {
    fn draw_node(&mut self, node: &Node<T>) -> io::Result<()>;

    fn draw_edge(&mut self, edge: &Edge<W>, node1: &Node<T>, node2: &Node<T>) -> io::Result<()>;

    /// Marks a node that is an endpoint of a spanning tree edge.
    fn highlight_node(&mut self, node: &Node<T>) -> io::Result<()>;

    /// Marks an edge of the spanning tree.
    fn highlight_edge(&mut self, edge: &Edge<W>, node1: &Node<T>, node2: &Node<T>)
        -> io::Result<()>;
}

/// Draws every edge of at least `threshold` weight, then every node, then highlights the
/// minimum spanning forest edge by edge along with both endpoints of each edge.
pub fn render_graph<T, W, R>(
    graph: &Graph<T, W>,
    threshold: W,
    renderer: &mut R,
) -> Result<(), CityMapError>
where
    W: PrimInt,
    R: GraphRenderer<T, W>,
{
    for edge in graph.visible_edges(threshold) {
        renderer.draw_edge(edge, graph.node(edge.node1()), graph.node(edge.node2()))?;
    }
    for node in graph.nodes() {
        renderer.draw_node(node)?;
    }

    let mut mst = graph.mst_edges();
    while mst.has_next()? {
        let edge = mst.take_next()?;
        let (node1, node2) = (graph.node(edge.node1()), graph.node(edge.node2()));
        renderer.highlight_edge(&edge, node1, node2)?;
        renderer.highlight_node(node1)?;
        renderer.highlight_node(node2)?;
    }
    Ok(())
}

/// Renders a city graph as lines of text.
pub struct TextRenderer<O> {
    out: O,
}

impl<O: Write> TextRenderer<O> {
    pub fn new(out: O) -> Self {
        TextRenderer { out }
    }

    pub fn into_inner(self) -> O {
        self.out
    }
}

impl<O: Write> GraphRenderer<City, u32> for TextRenderer<O> {
    fn draw_node(&mut self, node: &Node<City>) -> io::Result<()> {
        writeln!(self.out, "node {}", node.data())
    }

    fn draw_edge(
        &mut self,
        edge: &Edge<u32>,
        node1: &Node<City>,
        node2: &Node<City>,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "edge {} - {} ({})",
            node1.data().name(),
            node2.data().name(),
            edge.weight()
        )
    }

    fn highlight_node(&mut self, node: &Node<City>) -> io::Result<()> {
        writeln!(self.out, "mst node {}", node.data().name())
    }

    fn highlight_edge(
        &mut self,
        edge: &Edge<u32>,
        node1: &Node<City>,
        node2: &Node<City>,
    ) -> io::Result<()> {
        writeln!(
            self.out,
            "mst edge {} - {} ({})",
            node1.data().name(),
            node2.data().name(),
            edge.weight()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NodeId;

    #[derive(Default)]
    struct Recorder {
        drawn_nodes: Vec<NodeId>,
        drawn_edges: Vec<u32>,
        highlighted_nodes: Vec<NodeId>,
        highlighted_edges: Vec<u32>,
    }

    impl GraphRenderer<&'static str, u32> for Recorder {
        fn draw_node(&mut self, node: &Node<&'static str>) -> io::Result<()> {
            self.drawn_nodes.push(node.id());
            Ok(())
        }

        fn draw_edge(
            &mut self,
            edge: &Edge<u32>,
            _: &Node<&'static str>,
            _: &Node<&'static str>,
        ) -> io::Result<()> {
            self.drawn_edges.push(edge.weight());
            Ok(())
        }

        fn highlight_node(&mut self, node: &Node<&'static str>) -> io::Result<()> {
            self.highlighted_nodes.push(node.id());
            Ok(())
        }

        fn highlight_edge(
            &mut self,
            edge: &Edge<u32>,
            _: &Node<&'static str>,
            _: &Node<&'static str>,
        ) -> io::Result<()> {
            self.highlighted_edges.push(edge.weight());
            Ok(())
        }
    }

    #[test]
    fn renders_visible_edges_then_highlights_tree() {
        let mut graph: Graph<&'static str> = Graph::new();
        let a = graph.add_node("A");
        let b = graph.add_node("B");
        let c = graph.add_node("C");
        graph.add_edge(a, b, 5);
        graph.add_edge(b, c, 3);
        graph.add_edge(a, c, 10);

        let mut recorder = Recorder::default();
        render_graph(&graph, 5, &mut recorder).unwrap();

        assert_eq!(vec![5, 10], recorder.drawn_edges);
        assert_eq!(vec![a, b, c], recorder.drawn_nodes);
        assert_eq!(vec![3, 5], recorder.highlighted_edges);
        assert_eq!(vec![b, c, a, b], recorder.highlighted_nodes);
    }

    #[test]
    fn text_renderer_writes_city_names() {
        let mut graph: Graph<City> = Graph::new();
        let boston = graph.add_node(City::new("Boston", 42.3601, -71.0589));
        let albany = graph.add_node(City::new("Albany", 42.6526, -73.7562));
        graph.add_edge(boston, albany, 137);

        let mut renderer = TextRenderer::new(Vec::new());
        render_graph(&graph, 10, &mut renderer).unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines = text.lines().collect::<Vec<_>>();

        assert_eq!("edge Boston - Albany (137)", lines[0]);
        assert!(lines[1].starts_with("node Boston (lat. "));
        assert_eq!("mst edge Boston - Albany (137)", lines[3]);
        assert_eq!("mst node Boston", lines[4]);
        assert_eq!("mst node Albany", lines[5]);
        assert_eq!(6, lines.len());
    }
}
