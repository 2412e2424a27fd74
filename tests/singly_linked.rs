use orx_capability_col::prelude::*;
use orx_capability_col::{
    ContainerError, Fork, Link, Node, NodeGraph, NodePtr, Relation, Terminal,
};

type Graph = NodeGraph<i32>;

/// Number of links reachable through `next`, including the visited one.
struct Length;

impl<E> Visitor<E> for Length {
    type Output = usize;

    fn visit_link(&mut self, link: &Link<E>) -> usize {
        1 + link.next().accept(self)
    }

    fn visit_fork(&mut self, _: &Fork<E>) -> usize {
        1
    }

    fn visit_terminal(&mut self, _: Terminal) -> usize {
        0
    }
}

/// Collects elements in traversal order and counts how many times the end is reached.
#[derive(Default)]
struct Collect {
    elements: Vec<i32>,
    terminals: usize,
}

impl Visitor<i32> for Collect {
    type Output = ();

    fn visit_link(&mut self, link: &Link<i32>) {
        self.elements.push(link.read(|x| *x));
        link.next().accept(self)
    }

    fn visit_fork(&mut self, fork: &Fork<i32>) {
        self.elements.push(fork.read(|x| *x));
    }

    fn visit_terminal(&mut self, _: Terminal) {
        self.terminals += 1;
    }
}

fn chain(graph: &mut Graph, elements: &[i32]) -> Relation<i32> {
    let mut head = Relation::Terminal;
    for x in elements.iter().rev() {
        head = graph.push_link(*x, head).unwrap().into();
    }
    head
}

fn head(relation: Relation<i32>) -> NodePtr<i32> {
    relation.node_ptr().unwrap()
}

#[test]
fn length_of_chain() {
    let mut graph = Graph::new();
    let list = head(chain(&mut graph, &[1, 2, 3]));

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.accept(list, &mut Length), Ok(3));
}

#[test]
fn terminal_is_reached_once() {
    let mut graph = Graph::new();
    let list = head(chain(&mut graph, &[1, 2, 3]));

    let mut collect = Collect::default();
    graph.accept(list, &mut collect).unwrap();

    assert_eq!(collect.elements, vec![1, 2, 3]);
    assert_eq!(collect.terminals, 1);
}

#[test]
fn empty_list_is_terminal() {
    let mut graph = Graph::new();
    let list = chain(&mut graph, &[]);

    assert!(list.is_terminal());
    assert!(graph.is_empty());

    let edge = graph.edge(list).unwrap();
    assert!(edge.is_terminal());
    assert_eq!(edge.accept(&mut Length), 0);
}

#[test]
fn relink_tail() {
    let mut graph = Graph::new();
    let list = head(chain(&mut graph, &[1, 2]));
    let extra = head(chain(&mut graph, &[7, 8, 9]));

    let second = graph
        .node(list)
        .map(|x| match x {
            Node::Link(link) => link.next_relation(),
            _ => Relation::Terminal,
        })
        .unwrap();
    let second = head(second);

    assert_eq!(graph.set_next(second, extra), Ok(Relation::Terminal));
    assert_eq!(graph.accept(list, &mut Length), Ok(5));

    let mut collect = Collect::default();
    graph.accept(list, &mut collect).unwrap();
    assert_eq!(collect.elements, vec![1, 2, 7, 8, 9]);
}

#[test]
fn link_ending_at_fork() {
    let mut graph = Graph::new();
    let fork = graph.push_fork(10, Terminal, Terminal).unwrap();
    let link = graph.push_link(1, fork).unwrap();

    assert_eq!(graph.accept(link, &mut Length), Ok(2));
}

#[test]
fn links_have_no_left() {
    let mut graph = Graph::new();
    let link = graph.push_link(1, Terminal).unwrap();

    assert_eq!(
        graph.set_left(link, Terminal),
        Err(ContainerError::MissingRelation {
            relation: "left",
            variant: "link"
        })
    );
}

#[test]
fn visiting_a_foreign_node() {
    let mut graph = Graph::new();
    let mut other = Graph::new();
    let foreign = other.push_link(1, Terminal).unwrap();

    assert_eq!(
        graph.accept(foreign, &mut Length),
        Err(ContainerError::ForeignNode)
    );
    assert_eq!(
        graph.push_link(0, foreign).err(),
        Some(ContainerError::ForeignNode)
    );
}
