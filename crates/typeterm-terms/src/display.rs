//! Surface rendering of terms.
//!
//! Output follows the written syntax closely enough for diagnostics. It is
//! not guaranteed to reparse, and distinct terms may render alike (the empty
//! tuple and `Void` both print as `()`).

use std::fmt::{self, Display, Formatter};

use crate::extent::{ExtentRange, Indices};
use crate::static_arg::{StaticArg, StaticArgKind};
use crate::static_param::StaticParam;
use crate::type_term::{KeywordType, TypeKind, TypeTerm};

/// Writes `items` separated by `", "`.
fn write_list<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Writes positional entries followed by keyword entries.
fn write_fields(
    f: &mut Formatter<'_>,
    elements: &[TypeTerm],
    keywords: &[KeywordType],
) -> fmt::Result {
    write_list(f, elements)?;
    if !elements.is_empty() && !keywords.is_empty() {
        f.write_str(", ")?;
    }
    write_list(f, keywords)
}

impl Display for TypeTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TypeKind::Named(name) => write!(f, "{name}"),
            TypeKind::Parameterized { generic, args } => {
                write!(f, "{generic}[\\")?;
                write_list(f, args)?;
                f.write_str("\\]")
            }
            TypeKind::Tuple { elements, keywords } => {
                f.write_str("(")?;
                write_fields(f, elements, keywords)?;
                f.write_str(")")
            }
            TypeKind::Arrow {
                range,
                domain,
                keywords,
                throws,
            } => {
                match (domain.as_slice(), keywords.is_empty()) {
                    ([single], true) => write!(f, "{single}")?,
                    _ => {
                        f.write_str("(")?;
                        write_fields(f, domain, keywords)?;
                        f.write_str(")")?;
                    }
                }
                write!(f, " -> {range}")?;
                if !throws.is_empty() {
                    f.write_str(" throws {")?;
                    write_list(f, throws)?;
                    f.write_str("}")?;
                }
                Ok(())
            }
            TypeKind::ArrayIndexed { element, indices } => write!(f, "{element}{indices}"),
            TypeKind::Matrix {
                element,
                dimensions,
            } => {
                write!(f, "{element}^(")?;
                for (i, extent) in dimensions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" x ")?;
                    }
                    write!(f, "{extent}")?;
                }
                f.write_str(")")
            }
            TypeKind::Vector { element, dim } => write!(f, "{element}^{dim}"),
            TypeKind::Set { element } => write!(f, "{{{element}}}"),
            TypeKind::List { element } => write!(f, "<|{element}|>"),
            TypeKind::Map { key, value } => write!(f, "{{{key} |-> {value}}}"),
            TypeKind::Rest { element } => write!(f, "{element}..."),
            TypeKind::Void => f.write_str("()"),
        }
    }
}

impl Display for KeywordType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.ty)
    }
}

impl Display for ExtentRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (&self.base, &self.size) {
            (Some(base), Some(size)) => write!(f, "{base}#{size}"),
            (None, Some(size)) => write!(f, "{size}"),
            (Some(base), None) => write!(f, "{base}#"),
            (None, None) => f.write_str("_"),
        }
    }
}

impl Display for Indices {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_list(f, &self.extents)?;
        f.write_str("]")
    }
}

impl Display for StaticArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind() {
            StaticArgKind::Type(term) => write!(f, "{term}"),
            StaticArgKind::NatLiteral(value) => write!(f, "{value}"),
            StaticArgKind::NatRef(name)
            | StaticArgKind::BoolRef(name)
            | StaticArgKind::UnitRef(name) => write!(f, "{name}"),
            StaticArgKind::NatSum { left, right } => write!(f, "({left} + {right})"),
            StaticArgKind::NatProduct { left, right } => write!(f, "({left} {right})"),
            StaticArgKind::NatQuotient {
                numerator,
                denominator,
            } => write!(f, "({numerator} / {denominator})"),
            StaticArgKind::BoolLiteral(value) => write!(f, "{value}"),
            StaticArgKind::OprArg(op) => write!(f, "opr {op}"),
            StaticArgKind::Number(literal) => write!(f, "{literal}"),
            StaticArgKind::DimRef(inner) => write!(f, "{inner}"),
            StaticArgKind::DimProduct {
                multiplier,
                multiplicand,
            } => write!(f, "({multiplier} {multiplicand})"),
            StaticArgKind::DimQuotient {
                numerator,
                denominator,
            } => write!(f, "({numerator} / {denominator})"),
            StaticArgKind::DimExponent { power, base } => write!(f, "{base}^{power}"),
        }
    }
}

impl Display for StaticParam {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StaticParam::Type {
                name,
                absorbs,
                extends,
            } => {
                write!(f, "{name}")?;
                if let Some(bounds) = extends {
                    f.write_str(" extends {")?;
                    write_list(f, bounds)?;
                    f.write_str("}")?;
                }
                if *absorbs {
                    f.write_str(" absorbs unit")?;
                }
                Ok(())
            }
            StaticParam::Nat { name } => write!(f, "nat {name}"),
            StaticParam::Int { name } => write!(f, "int {name}"),
            StaticParam::Bool { name } => write!(f, "bool {name}"),
            StaticParam::Dim { name } => write!(f, "dim {name}"),
            StaticParam::Unit { name, dim } => match dim {
                Some(dim) => write!(f, "unit {name}: {dim}"),
                None => write!(f, "unit {name}"),
            },
            StaticParam::Opr { name } => write!(f, "opr {name}"),
        }
    }
}
