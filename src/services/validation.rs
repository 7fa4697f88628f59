use std::collections::HashMap;
use std::fmt;

/// Raw query-string parameters.
pub type Query = HashMap<String, String>;

#[derive(Debug, Clone, Copy)]
pub enum Rule {
    Required,
    Integer,
    Min(i64),
    In(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRules {
    pub field: &'static str,
    /// Checked in order; the first failure per field is reported.
    pub rules: &'static [(Rule, &'static str)],
}

#[derive(Debug, Clone, Copy)]
pub struct Schema(pub &'static [FieldRules]);

pub const VIDEO_INFO_LIST: Schema = Schema(&[
    FieldRules {
        field: "category_id",
        rules: &[
            (Rule::Required, "category_id is required"),
            (Rule::Integer, "category_id must be an integer"),
            (Rule::Min(0), "category_id must not be negative"),
        ],
    },
    FieldRules {
        field: "page",
        rules: &[
            (Rule::Integer, "page must be an integer"),
            (Rule::Min(1), "page must be at least 1"),
        ],
    },
    FieldRules {
        field: "count",
        rules: &[
            (Rule::Integer, "count must be an integer"),
            (Rule::Min(1), "count must be at least 1"),
        ],
    },
    FieldRules {
        field: "recommend",
        rules: &[(Rule::In(&["0", "1"]), "recommend must be 0 or 1")],
    },
]);

/// Applied to the category listing only when `have_data` is present.
pub const CATEGORY_PREVIEW: Schema = Schema(&[FieldRules {
    field: "count",
    rules: &[
        (Rule::Integer, "count must be an integer"),
        (Rule::Min(1), "count must be at least 1"),
    ],
}]);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn first_message(&self) -> &str {
        self.0.first().map(|e| e.message).unwrap_or("invalid request")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.first_message())
    }
}

/// A parameter counts as present only when it is non-empty after trimming.
pub fn param<'a>(query: &'a Query, field: &str) -> Option<&'a str> {
    query
        .get(field)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

pub fn int_param(query: &Query, field: &str) -> Option<i64> {
    param(query, field).and_then(|v| v.parse().ok())
}

fn passes(rule: Rule, value: Option<&str>) -> bool {
    match (rule, value) {
        (Rule::Required, value) => value.is_some(),
        // Optional fields are only checked when supplied.
        (_, None) => true,
        (Rule::Integer, Some(v)) => v.parse::<i64>().is_ok(),
        (Rule::Min(min), Some(v)) => v.parse::<i64>().map_or(true, |n| n >= min),
        (Rule::In(allowed), Some(v)) => allowed.contains(&v),
    }
}

pub fn validate(schema: &Schema, query: &Query) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = schema
        .0
        .iter()
        .filter_map(|field| {
            let value = param(query, field.field);
            field
                .rules
                .iter()
                .find(|(rule, _)| !passes(*rule, value))
                .map(|(_, message)| FieldError {
                    field: field.field,
                    message: *message,
                })
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
