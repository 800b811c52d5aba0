use crate::file::OptionTable;

/// Fold a theme's options into the file that named it.
/// Keys only the parent has are appended to `child` in the parent's order.
/// Keys both sides have keep the child's value.
pub fn merge_parent(parent: OptionTable, child: &mut OptionTable) {
    for (key, option) in parent {
        child.entry(key).or_insert(option);
    }
}
