//! Column metadata and type information

/// Declared type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    /// Every value is missing
    #[default]
    Null,
    Int,
    Float,
    String,
    /// Text and numbers in the same column
    Mixed,
}

impl CellType {
    /// Widen the type to accommodate another type
    pub fn widen(self, other: CellType) -> CellType {
        if self == other {
            return self;
        }

        match (self, other) {
            (CellType::Null, t) | (t, CellType::Null) => t,
            (CellType::Int, CellType::Float) | (CellType::Float, CellType::Int) => CellType::Float,
            _ => CellType::Mixed,
        }
    }

    /// Numeric columns are imputed with the median and coerced to integers.
    ///
    /// An all-missing column loads as `Null` and is treated as numeric, matching how an
    /// empty column reads as floating point in a dataframe.
    pub fn is_numeric(self) -> bool {
        matches!(self, CellType::Null | CellType::Int | CellType::Float)
    }

    /// Categorical columns are imputed with the mode
    pub fn is_categorical(self) -> bool {
        matches!(self, CellType::String | CellType::Mixed)
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellType::Null => write!(f, "null"),
            CellType::Int => write!(f, "int"),
            CellType::Float => write!(f, "float"),
            CellType::String => write!(f, "string"),
            CellType::Mixed => write!(f, "mixed"),
        }
    }
}

/// Column metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name (from header, possibly normalized)
    pub name: String,
    /// Column index (0-based position)
    pub index: usize,
    /// Declared type of every value in the column
    pub cell_type: CellType,
}

impl Column {
    /// Create a new untyped column with name and index
    pub fn new(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            cell_type: CellType::Null,
        }
    }

    /// Create a column with a specified type
    pub fn with_type(name: impl Into<String>, index: usize, cell_type: CellType) -> Self {
        Self {
            name: name.into(),
            index,
            cell_type,
        }
    }
}
