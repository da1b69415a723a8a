//! Variant tags.
//!
//! Every root sum type has a dense `Copy` tag. Tags are the first thing the
//! ordering engine compares: two terms with different tags order by tag and
//! nothing else. The tag order is declaration order and holds for the
//! lifetime of the program.

use crate::static_arg::StaticArgKind;
use crate::static_param::StaticParam;
use crate::type_term::TypeKind;

/// Tag of a [`TypeKind`] variant.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum TypeTag {
    /// [`TypeKind::Named`].
    Named,
    /// [`TypeKind::Parameterized`].
    Parameterized,
    /// [`TypeKind::Tuple`].
    Tuple,
    /// [`TypeKind::Arrow`].
    Arrow,
    /// [`TypeKind::ArrayIndexed`].
    ArrayIndexed,
    /// [`TypeKind::Matrix`].
    Matrix,
    /// [`TypeKind::Vector`].
    Vector,
    /// [`TypeKind::Set`].
    Set,
    /// [`TypeKind::List`].
    List,
    /// [`TypeKind::Map`].
    Map,
    /// [`TypeKind::Rest`].
    Rest,
    /// [`TypeKind::Void`].
    Void,
}

impl TypeTag {
    /// Every tag, in order.
    pub const ALL: [TypeTag; 12] = [
        TypeTag::Named,
        TypeTag::Parameterized,
        TypeTag::Tuple,
        TypeTag::Arrow,
        TypeTag::ArrayIndexed,
        TypeTag::Matrix,
        TypeTag::Vector,
        TypeTag::Set,
        TypeTag::List,
        TypeTag::Map,
        TypeTag::Rest,
        TypeTag::Void,
    ];

    /// Returns the dense index of this tag.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Tag of a [`StaticArgKind`] variant.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum ArgTag {
    /// [`StaticArgKind::Type`].
    Type,
    /// [`StaticArgKind::NatLiteral`].
    NatLiteral,
    /// [`StaticArgKind::NatRef`].
    NatRef,
    /// [`StaticArgKind::NatSum`].
    NatSum,
    /// [`StaticArgKind::NatProduct`].
    NatProduct,
    /// [`StaticArgKind::NatQuotient`].
    NatQuotient,
    /// [`StaticArgKind::BoolLiteral`].
    BoolLiteral,
    /// [`StaticArgKind::BoolRef`].
    BoolRef,
    /// [`StaticArgKind::OprArg`].
    OprArg,
    /// [`StaticArgKind::UnitRef`].
    UnitRef,
    /// [`StaticArgKind::Number`].
    Number,
    /// [`StaticArgKind::DimRef`].
    DimRef,
    /// [`StaticArgKind::DimProduct`].
    DimProduct,
    /// [`StaticArgKind::DimQuotient`].
    DimQuotient,
    /// [`StaticArgKind::DimExponent`].
    DimExponent,
}

impl ArgTag {
    /// Every tag, in order.
    pub const ALL: [ArgTag; 15] = [
        ArgTag::Type,
        ArgTag::NatLiteral,
        ArgTag::NatRef,
        ArgTag::NatSum,
        ArgTag::NatProduct,
        ArgTag::NatQuotient,
        ArgTag::BoolLiteral,
        ArgTag::BoolRef,
        ArgTag::OprArg,
        ArgTag::UnitRef,
        ArgTag::Number,
        ArgTag::DimRef,
        ArgTag::DimProduct,
        ArgTag::DimQuotient,
        ArgTag::DimExponent,
    ];

    /// Returns the dense index of this tag.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Tag of a [`StaticParam`] variant.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum ParamTag {
    /// [`StaticParam::Type`].
    Type,
    /// [`StaticParam::Nat`].
    Nat,
    /// [`StaticParam::Int`].
    Int,
    /// [`StaticParam::Bool`].
    Bool,
    /// [`StaticParam::Dim`].
    Dim,
    /// [`StaticParam::Unit`].
    Unit,
    /// [`StaticParam::Opr`].
    Opr,
}

impl ParamTag {
    /// Every tag, in order.
    pub const ALL: [ParamTag; 7] = [
        ParamTag::Type,
        ParamTag::Nat,
        ParamTag::Int,
        ParamTag::Bool,
        ParamTag::Dim,
        ParamTag::Unit,
        ParamTag::Opr,
    ];

    /// Returns the dense index of this tag.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl TypeKind {
    /// Returns the variant tag.
    #[must_use]
    pub const fn tag(&self) -> TypeTag {
        match self {
            TypeKind::Named(_) => TypeTag::Named,
            TypeKind::Parameterized { .. } => TypeTag::Parameterized,
            TypeKind::Tuple { .. } => TypeTag::Tuple,
            TypeKind::Arrow { .. } => TypeTag::Arrow,
            TypeKind::ArrayIndexed { .. } => TypeTag::ArrayIndexed,
            TypeKind::Matrix { .. } => TypeTag::Matrix,
            TypeKind::Vector { .. } => TypeTag::Vector,
            TypeKind::Set { .. } => TypeTag::Set,
            TypeKind::List { .. } => TypeTag::List,
            TypeKind::Map { .. } => TypeTag::Map,
            TypeKind::Rest { .. } => TypeTag::Rest,
            TypeKind::Void => TypeTag::Void,
        }
    }
}

impl StaticArgKind {
    /// Returns the variant tag.
    #[must_use]
    pub const fn tag(&self) -> ArgTag {
        match self {
            StaticArgKind::Type(_) => ArgTag::Type,
            StaticArgKind::NatLiteral(_) => ArgTag::NatLiteral,
            StaticArgKind::NatRef(_) => ArgTag::NatRef,
            StaticArgKind::NatSum { .. } => ArgTag::NatSum,
            StaticArgKind::NatProduct { .. } => ArgTag::NatProduct,
            StaticArgKind::NatQuotient { .. } => ArgTag::NatQuotient,
            StaticArgKind::BoolLiteral(_) => ArgTag::BoolLiteral,
            StaticArgKind::BoolRef(_) => ArgTag::BoolRef,
            StaticArgKind::OprArg(_) => ArgTag::OprArg,
            StaticArgKind::UnitRef(_) => ArgTag::UnitRef,
            StaticArgKind::Number(_) => ArgTag::Number,
            StaticArgKind::DimRef(_) => ArgTag::DimRef,
            StaticArgKind::DimProduct { .. } => ArgTag::DimProduct,
            StaticArgKind::DimQuotient { .. } => ArgTag::DimQuotient,
            StaticArgKind::DimExponent { .. } => ArgTag::DimExponent,
        }
    }
}

impl StaticParam {
    /// Returns the variant tag.
    #[must_use]
    pub const fn tag(&self) -> ParamTag {
        match self {
            StaticParam::Type { .. } => ParamTag::Type,
            StaticParam::Nat { .. } => ParamTag::Nat,
            StaticParam::Int { .. } => ParamTag::Int,
            StaticParam::Bool { .. } => ParamTag::Bool,
            StaticParam::Dim { .. } => ParamTag::Dim,
            StaticParam::Unit { .. } => ParamTag::Unit,
            StaticParam::Opr { .. } => ParamTag::Opr,
        }
    }
}
