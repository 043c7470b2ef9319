use crate::item::TreeItem;

/// One node of the demo scene tree. Stands in for the host's opaque item
/// handle; real hosts implement [`TreeItem`] on their own node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneNode {
    pub name: String,
    pub tag: String,
    pub layer: u32,
    pub active: bool,
    pub components: Vec<String>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: String::new(),
            layer: 0,
            active: true,
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn layer(mut self, layer: u32) -> Self {
        self.layer = layer;
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn component(mut self, descriptor: impl Into<String>) -> Self {
        self.components.push(descriptor.into());
        self
    }

    pub fn child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Every component descriptor present anywhere in the tree, sorted and
    /// deduplicated. The editor offers these as choices; it never discovers
    /// types on its own.
    pub fn collect_component_types(&self) -> Vec<String> {
        let mut types = Vec::new();
        collect_into(self, &mut types);
        types.sort();
        types.dedup();
        types
    }
}

fn collect_into(node: &SceneNode, types: &mut Vec<String>) {
    types.extend(node.components.iter().cloned());
    for child in &node.children {
        collect_into(child, types);
    }
}

impl TreeItem for SceneNode {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn layer_index(&self) -> u32 {
        self.layer
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn has_component(&self, descriptor: &str) -> bool {
        self.components.iter().any(|c| c == descriptor)
    }
}

/// A small scene with enough variety to exercise every rule kind.
pub fn sample_scene() -> SceneNode {
    SceneNode::new("Level")
        .child(
            SceneNode::new("Player")
                .tag("Player")
                .component("CharacterMotor")
                .component("Inventory")
                .child(SceneNode::new("Camera").component("FollowCamera")),
        )
        .child(
            SceneNode::new("Enemies")
                .child(
                    SceneNode::new("Grunt A")
                        .tag("Enemy")
                        .layer(2)
                        .component("PatrolBrain"),
                )
                .child(
                    SceneNode::new("Grunt B")
                        .tag("Enemy")
                        .layer(2)
                        .component("PatrolBrain")
                        .inactive(),
                )
                .child(
                    SceneNode::new("Boss")
                        .tag("Enemy")
                        .layer(3)
                        .component("BossBrain")
                        .component("LootTable"),
                ),
        )
        .child(
            SceneNode::new("Environment")
                .layer(8)
                .child(SceneNode::new("Terrain").layer(8))
                .child(SceneNode::new("Water").layer(8).component("WaveField"))
                .child(SceneNode::new("Props").layer(8).inactive()),
        )
        .child(
            SceneNode::new("UI")
                .tag("Interface")
                .layer(5)
                .child(SceneNode::new("HUD").component("HealthBar"))
                .child(SceneNode::new("PauseMenu").inactive()),
        )
}
