/// Structural role of a hierarchy item, derived by the host from its object graph.
///
/// For members of a template instance the role describes the asset backing the
/// enclosing instance; whether the item is the instance root is tracked
/// separately (see [`crate::RowState`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ItemRole {
    /// Not part of any template instance.
    #[default]
    Plain,
    /// Instance of a regular template asset.
    TemplateRoot,
    /// Instance of a template variant.
    TemplateVariant,
    /// Instance of an imported model template.
    TemplateModel,
    /// Instance whose backing asset can no longer be resolved.
    MissingReference,
}

impl ItemRole {
    /// Returns `true` for every role backed by a template instance, broken or not.
    pub const fn is_template(self) -> bool {
        !matches!(self, Self::Plain)
    }

    /// Returns `true` for template roles whose asset still resolves.
    pub const fn is_valid_template(self) -> bool {
        matches!(
            self,
            Self::TemplateRoot | Self::TemplateVariant | Self::TemplateModel
        )
    }

    pub const fn is_missing(self) -> bool {
        matches!(self, Self::MissingReference)
    }
}

/// Kind of asset behind an item's enclosing template instance, as reported by
/// the host's asset database.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TemplateAssetKind {
    #[default]
    NotATemplate,
    Regular,
    Variant,
    Model,
    MissingAsset,
}

impl From<TemplateAssetKind> for ItemRole {
    fn from(kind: TemplateAssetKind) -> Self {
        match kind {
            TemplateAssetKind::NotATemplate => Self::Plain,
            TemplateAssetKind::Regular => Self::TemplateRoot,
            TemplateAssetKind::Variant => Self::TemplateVariant,
            TemplateAssetKind::Model => Self::TemplateModel,
            TemplateAssetKind::MissingAsset => Self::MissingReference,
        }
    }
}

/// Symbolic icon key; the host maps it to a drawable (see [`crate::IconGlyphs`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IconId {
    GenericObject,
    GenericTemplate,
    ModelTemplate,
    VariantTemplate,
    /// Overlay badge for an instance-specific addition.
    AddedOverride,
    /// Forward indicator drawn after a template instance root.
    ContinuationArrow,
}

impl IconId {
    /// Stable string key for host resource lookup.
    pub const fn key(self) -> &'static str {
        match self {
            Self::GenericObject => "object",
            Self::GenericTemplate => "template",
            Self::ModelTemplate => "template-model",
            Self::VariantTemplate => "template-variant",
            Self::AddedOverride => "override-added",
            Self::ContinuationArrow => "continuation",
        }
    }
}
