use crate::context::RowState;
use crate::role::{ItemRole, TemplateAssetKind};

/// Per-item facts the decorator needs from the host's scene graph.
///
/// The host owns traversal and windowing; implementations only answer
/// questions about a single item:
/// - `asset_kind` reports the asset behind the item's enclosing template
///   instance (members share the kind of their instance);
/// - `is_instance_root` is `true` only for the nearest instance root itself.
pub trait HierarchyModel {
    /// Item identifier type.
    type Id: Copy;

    /// Returns the raw item name as shown in the hierarchy.
    fn name(&self, id: Self::Id) -> &str;
    /// Returns the template asset kind of the item's enclosing instance.
    fn asset_kind(&self, id: Self::Id) -> TemplateAssetKind;
    /// Returns `true` if the item is the root of its template instance.
    fn is_instance_root(&self, id: Self::Id) -> bool;
    /// Returns `true` if the item is part of the current selection.
    fn is_selected(&self, id: Self::Id) -> bool;
    /// Returns `true` if the item was added on top of a template instance.
    fn has_local_override(&self, _id: Self::Id) -> bool {
        false
    }

    /// Collects the row facts for an item.
    fn row_state(&self, id: Self::Id) -> RowState {
        RowState::new(ItemRole::from(self.asset_kind(id)))
            .instance_root(self.is_instance_root(id))
            .selected(self.is_selected(id))
            .local_override(self.has_local_override(id))
    }
}
