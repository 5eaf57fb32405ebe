use std::fmt;

/// How a column's values compare when sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Number,
    String,
    Date,
}

/// Known table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Id,
    FirstName,
    LastName,
    Email,
    Age,
    HireDate,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::FirstName,
        Column::LastName,
        Column::Email,
        Column::Age,
        Column::HireDate,
    ];

    /// Field key, matching the serialized entity.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Age => "age",
            Self::HireDate => "hireDate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Age => "Age",
            Self::HireDate => "Hire Date",
        }
    }

    pub fn kind(&self) -> ColumnType {
        match self {
            Self::Id | Self::Age => ColumnType::Number,
            Self::FirstName | Self::LastName | Self::Email => ColumnType::String,
            Self::HireDate => ColumnType::Date,
        }
    }

    /// Display width in characters.
    pub fn width(&self) -> usize {
        match self {
            Self::Id => 4,
            Self::FirstName | Self::LastName => 12,
            Self::Email => 28,
            Self::Age => 4,
            Self::HireDate => 10,
        }
    }

    /// Accepts the field key in any case, with or without `-`/`_`.
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.id().to_ascii_lowercase() == key)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(Column::parse("firstName"), Some(Column::FirstName));
        assert_eq!(Column::parse("first-name"), Some(Column::FirstName));
        assert_eq!(Column::parse("HIRE_DATE"), Some(Column::HireDate));
        assert_eq!(Column::parse("salary"), None);
    }

    #[test]
    fn declared_types() {
        assert_eq!(Column::Age.kind(), ColumnType::Number);
        assert_eq!(Column::Email.kind(), ColumnType::String);
        assert_eq!(Column::HireDate.kind(), ColumnType::Date);
    }
}
