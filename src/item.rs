/// Read-only view of one node of the host's hierarchy tree.
///
/// The annotation engine never owns or mutates an item; the host hands a
/// reference in once per visible row per redraw.
pub trait TreeItem {
    fn tag(&self) -> &str;
    fn layer_index(&self) -> u32;
    fn display_name(&self) -> &str;
    fn is_active(&self) -> bool;
    /// Whether the item owns a component of the named type. Descriptors
    /// that resolve to no known type must return `false`, not error; the
    /// set of loaded types is the host's concern and may change under us.
    fn has_component(&self, descriptor: &str) -> bool;
}
