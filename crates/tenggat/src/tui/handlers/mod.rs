pub(super) mod dialog;
pub(super) mod navigation;
