use std::collections::HashMap;
use std::sync::Arc;

use petgraph::Direction;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;

use crate::types::Dependency;
use crate::types::Module;

pub type NodeId = usize;

#[derive(Clone, Debug, PartialEq)]
pub enum ModuleGraphNode {
  Root,
  Module(Arc<Module>),
  Dependency(Arc<Dependency>),
}

/// An incoming reference edge as seen from its target module.
///
/// `origin_module` is absent for entry/synthetic dependencies, which hang off
/// the graph root rather than a module.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
  pub origin_module: Option<NodeId>,
  pub dependency: Arc<Dependency>,
}

/// PetGraph-backed module graph.
///
/// Dependencies are nodes sitting between their origin and target modules,
/// so a connection is the (origin module -> dependency -> target module)
/// path. Node ids are dense and stable across the life of the graph, which
/// lets consumers keep per-module tables in plain vectors.
#[derive(Clone, Debug)]
pub struct ModuleGraph {
  pub graph: StableDiGraph<NodeId, ()>,
  nodes: Vec<ModuleGraphNode>,
  content_key_to_node_id: HashMap<String, NodeId>,
  node_id_to_node_index: HashMap<NodeId, NodeIndex>,
  module_indices: HashMap<NodeId, u32>,
  root_node_id: NodeId,
}

impl Default for ModuleGraph {
  fn default() -> Self {
    Self::new()
  }
}

impl ModuleGraph {
  pub fn new() -> Self {
    let mut graph = StableDiGraph::new();

    let mut node_id_to_node_index = HashMap::new();
    let nodes = vec![ModuleGraphNode::Root];
    let root_node_id = 0;

    node_id_to_node_index.insert(root_node_id, graph.add_node(root_node_id));

    ModuleGraph {
      graph,
      nodes,
      content_key_to_node_id: HashMap::new(),
      node_id_to_node_index,
      module_indices: HashMap::new(),
      root_node_id,
    }
  }

  pub fn root_node(&self) -> NodeId {
    self.root_node_id
  }

  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  pub fn nodes(&self) -> impl Iterator<Item = &ModuleGraphNode> {
    self.nodes.iter()
  }

  pub fn get_node(&self, idx: &NodeId) -> Option<&ModuleGraphNode> {
    self.nodes.get(*idx)
  }

  fn add_node(&mut self, content_key: String, node: ModuleGraphNode) -> NodeId {
    let node_id = if let Some(existing_node_id) = self.content_key_to_node_id.get(&content_key) {
      self.nodes[*existing_node_id] = node;
      *existing_node_id
    } else {
      let node_id = self.nodes.len();
      self.nodes.push(node);
      self.content_key_to_node_id.insert(content_key, node_id);
      node_id
    };

    let node_index = self.graph.add_node(node_id);
    self.node_id_to_node_index.insert(node_id, node_index);

    node_id
  }

  pub fn add_module(&mut self, module: Arc<Module>) -> NodeId {
    self.add_node(module.id.clone(), ModuleGraphNode::Module(module))
  }

  pub fn add_dependency(&mut self, dependency: Dependency) -> NodeId {
    self.add_node(
      dependency.id.clone(),
      ModuleGraphNode::Dependency(Arc::new(dependency)),
    )
  }

  /// Adds an entry dependency and connects it to the graph root, so any
  /// module it resolves to sees a connection without an origin module.
  pub fn add_entry_dependency(&mut self, dependency: Dependency) -> NodeId {
    let dependency_id = self.add_dependency(dependency);
    let root_node_id = self.root_node_id;
    self.add_edge(&root_node_id, &dependency_id);
    dependency_id
  }

  pub fn get_module(&self, idx: &NodeId) -> Option<&Module> {
    let ModuleGraphNode::Module(module) = self.get_node(idx)? else {
      return None;
    };
    Some(module)
  }

  pub fn get_dependency(&self, idx: &NodeId) -> Option<&Dependency> {
    let ModuleGraphNode::Dependency(dependency) = self.get_node(idx)? else {
      return None;
    };
    Some(dependency)
  }

  pub fn get_node_id_by_content_key(&self, content_key: &str) -> Option<&NodeId> {
    self.content_key_to_node_id.get(content_key)
  }

  pub fn add_edge(&mut self, from_idx: &NodeId, to_idx: &NodeId) {
    self.graph.add_edge(
      self.node_id_to_node_index[from_idx],
      self.node_id_to_node_index[to_idx],
      (),
    );
  }

  /// Adds `dependency` between two existing modules and returns its node id.
  pub fn connect(
    &mut self,
    origin_module: &NodeId,
    dependency: Dependency,
    target_module: &NodeId,
  ) -> NodeId {
    let dependency_id = self.add_dependency(dependency);
    self.add_edge(origin_module, &dependency_id);
    self.add_edge(&dependency_id, target_module);
    dependency_id
  }

  /// Node ids of all module nodes, in insertion order.
  pub fn module_ids(&self) -> Vec<NodeId> {
    self
      .nodes
      .iter()
      .enumerate()
      .filter_map(|(node_id, node)| match node {
        ModuleGraphNode::Module(_) => Some(node_id),
        _ => None,
      })
      .collect()
  }

  /// Structural index assigned during graph construction, when one exists.
  ///
  /// Modules that were never visited by the builder (e.g. disconnected
  /// modules kept alive for other reasons) have no index and fall back to
  /// identifier ordering in comparators.
  pub fn module_index(&self, idx: &NodeId) -> Option<u32> {
    self.module_indices.get(idx).copied()
  }

  pub fn set_module_index(&mut self, idx: &NodeId, index: u32) {
    self.module_indices.insert(*idx, index);
  }

  /// Incoming reference edges of `module_id`, resolved through the
  /// dependency nodes that carry them.
  pub fn incoming_connections(&self, module_id: &NodeId) -> Vec<Connection> {
    let Some(module_index) = self.node_id_to_node_index.get(module_id) else {
      return Vec::new();
    };

    let mut connections = Vec::new();
    for dependency_index in self
      .graph
      .neighbors_directed(*module_index, Direction::Incoming)
    {
      let Some(dependency_id) = self.graph.node_weight(dependency_index) else {
        continue;
      };
      let Some(ModuleGraphNode::Dependency(dependency)) = self.get_node(dependency_id) else {
        continue;
      };

      let origin_module = self
        .graph
        .neighbors_directed(dependency_index, Direction::Incoming)
        .filter_map(|origin_index| self.graph.node_weight(origin_index).copied())
        .find(|origin_id| matches!(self.get_node(origin_id), Some(ModuleGraphNode::Module(_))));

      connections.push(Connection {
        origin_module,
        dependency: Arc::clone(dependency),
      });
    }

    connections
  }
}
