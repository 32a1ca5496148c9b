use super::Transformer;

/// The identity transformer: keeps every node.
///
/// Used where a rule only needs to validate its argument. Applying it still
/// yields a fresh root, see [`transform`](super::transform).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdTransformer;

impl Transformer for IdTransformer {}
