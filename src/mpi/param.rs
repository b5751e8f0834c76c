//! Formal parameters of extracted MPI declarations.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Opaque MPI handle types that need `f2c`/`c2f` conversion across the language boundary.
pub const HANDLE_TYPES: &[&str] = &[
    "MPI_Comm",
    "MPI_Errhandler",
    "MPI_File",
    "MPI_Group",
    "MPI_Info",
    "MPI_Op",
    "MPI_Request",
    "MPI_Status",
    "MPI_Datatype",
    "MPI_Win",
];

/// Integer types the Fortran binding passes through with their C width.
const INTEGER_TYPES: &[&str] = &["MPI_Aint", "MPI_Offset", "MPI_Count"];

pub const ELLIPSIS: &str = "...";

static EMPTY_BRACKETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\s*\]").expect("valid regex"));

/// One formal parameter, split into the pieces the generator recombines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Base type including any leading `const`; `None` for a variadic `...`.
    pub ty: Option<String>,
    /// Pointer stars and qualifiers, e.g. `*`, `**`, `* const*`.
    pub pointers: String,
    /// Declared name, or a synthesized `arg_N`.
    pub name: String,
    /// Array suffix such as `[]` or `[][3]`.
    pub array: Option<String>,
    pub pos: usize,
}

impl Param {
    pub fn new(ty: impl Into<String>, pointers: impl Into<String>, name: impl Into<String>, array: Option<String>, pos: usize) -> Self {
        Self {
            ty: Some(ty.into()),
            pointers: pointers.into(),
            name: name.into(),
            array,
            pos,
        }
    }

    pub fn ellipsis(pos: usize) -> Self {
        Self {
            ty: None,
            pointers: String::new(),
            name: ELLIPSIS.to_string(),
            array: None,
            pos,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        self.ty.is_none()
    }

    pub fn type_name(&self) -> &str {
        self.ty.as_deref().unwrap_or("")
    }

    fn array_suffix(&self) -> &str {
        self.array.as_deref().unwrap_or("")
    }

    /// Passed by reference: has pointer stars or an array suffix.
    pub fn is_indirect(&self) -> bool {
        !self.pointers.is_empty() || self.array.is_some()
    }

    pub fn is_handle(&self) -> bool {
        HANDLE_TYPES.contains(&self.type_name())
    }

    /// `MPI_Status` converts through dedicated status routines rather than `f2c`/`c2f`.
    pub fn is_status(&self) -> bool {
        self.type_name() == "MPI_Status"
    }

    /// A `char *` or `const char *`; Fortran passes its length as a hidden trailing argument.
    pub fn is_string(&self) -> bool {
        matches!(self.type_name(), "char" | "const char") && self.pointers == "*"
    }

    /// Prefix of the handle conversion routines, e.g. `MPI_Comm` for `MPI_Comm_f2c`.
    pub fn conversion_prefix(&self) -> &str {
        match self.type_name() {
            "MPI_Datatype" => "MPI_Type",
            other => other,
        }
    }

    /// Formal as written in a C prototype.
    pub fn c_formal(&self) -> String {
        match &self.ty {
            None => self.name.clone(),
            Some(ty) => format!("{} {}{}{}", ty, self.pointers, self.name, self.array_suffix()),
        }
    }

    /// Type with pointers and array suffix, no name.
    pub fn c_type(&self) -> String {
        match &self.ty {
            None => String::new(),
            Some(ty) => format!("{}{}{}", ty, self.pointers, self.array_suffix()),
        }
    }

    /// Formal as written in a Fortran-callable prototype: everything arrives by reference.
    pub fn fortran_formal(&self) -> String {
        let ty = self.type_name();
        let fortran_type = if INTEGER_TYPES.contains(&ty) || ty.ends_with("_function") || self.is_string() {
            ty
        } else {
            "MPI_Fint"
        };

        let pointers = if !self.pointers.is_empty() {
            self.pointers.as_str()
        } else if self.array.is_some() {
            ""
        } else {
            "*"
        };

        format!("{} {}{}{}", fortran_type, pointers, self.name, self.array_suffix())
    }

    /// Type usable in a cast: `[]` decays to `*`, `[][3]` to `(*)[3]`.
    pub fn cast_type(&self) -> String {
        let mut pointers = self.pointers.clone();
        let mut array = self.array_suffix().to_string();
        if EMPTY_BRACKETS.is_match(&array) {
            pointers.push_str(if array.matches('[').count() > 1 { "(*)" } else { "*" });
            array = EMPTY_BRACKETS.replace_all(&array, "").into_owned();
        }
        format!("{}{}{}", self.type_name(), pointers, array)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.c_formal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(ty: &str, pointers: &str, name: &str, array: Option<&str>) -> Param {
        Param::new(ty, pointers, name, array.map(str::to_string), 0)
    }

    #[test]
    fn c_rendering() {
        let p = param("const int", "", "ranges", Some("[][3]"));
        assert_eq!(p.c_formal(), "const int ranges[][3]");
        assert_eq!(p.c_type(), "const int[][3]");
        assert_eq!(p.cast_type(), "const int(*)[3]");
        assert_eq!(Param::ellipsis(2).c_formal(), "...");
        assert_eq!(Param::ellipsis(2).c_type(), "");
    }

    #[test]
    fn single_array_decays_to_pointer() {
        assert_eq!(param("MPI_Request", "", "reqs", Some("[]")).cast_type(), "MPI_Request*");
        assert_eq!(param("void", "*", "buf", None).cast_type(), "void*");
    }

    #[test]
    fn fortran_formals_are_references() {
        assert_eq!(param("MPI_Comm", "", "comm", None).fortran_formal(), "MPI_Fint *comm");
        assert_eq!(param("int", "", "counts", Some("[]")).fortran_formal(), "MPI_Fint counts[]");
        assert_eq!(param("MPI_Aint", "", "disp", None).fortran_formal(), "MPI_Aint *disp");
        assert_eq!(param("char", "*", "name", None).fortran_formal(), "char *name");
        assert_eq!(
            param("MPI_Comm_copy_attr_function", "*", "fn", None).fortran_formal(),
            "MPI_Comm_copy_attr_function *fn"
        );
    }

    #[test]
    fn classification() {
        assert!(param("MPI_Datatype", "", "t", None).is_handle());
        assert_eq!(param("MPI_Datatype", "", "t", None).conversion_prefix(), "MPI_Type");
        assert!(param("MPI_Status", "*", "s", None).is_status());
        assert!(param("const char", "*", "s", None).is_string());
        assert!(!param("char", "**", "argv", None).is_string());
        assert!(!param("int", "", "n", None).is_indirect());
    }
}
