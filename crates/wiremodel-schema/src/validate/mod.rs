//! Schema validation orchestration and shared helpers.

pub mod inherit;

use crate::{
    error::ErrorTree,
    node::{Schema, VisitableNode},
    visit::ValidateVisitor,
};

/// Run full schema validation in a staged, deterministic order.
pub(crate) fn validate_schema(schema: &Schema) -> Result<(), ErrorTree> {
    // Phase 1: validate each node (structural + local invariants).
    let mut errors = validate_nodes(schema);

    // Phase 2: enforce schema-wide invariants.
    validate_global(schema, &mut errors);

    errors.result()
}

// Validate all nodes via a visitor to retain route-aware error aggregation.
fn validate_nodes(schema: &Schema) -> ErrorTree {
    let mut visitor = ValidateVisitor::new();
    schema.accept(&mut visitor);

    visitor.errors
}

// Run global validation passes that require a full schema view.
fn validate_global(schema: &Schema, errors: &mut ErrorTree) {
    inherit::validate_inheritance(schema, errors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::ModelBuilder;

    #[test]
    fn valid_schema_passes() {
        let mut schema = Schema::new();
        schema
            .insert_model(
                ModelBuilder::new("validate_tests", "Person")
                    .attribute("firstName")
                    .build(),
            )
            .unwrap();
        schema
            .insert_model(
                ModelBuilder::new("validate_tests", "Author")
                    .extends("validate_tests::Person")
                    .has_many("books")
                    .build(),
            )
            .unwrap();

        assert!(validate_schema(&schema).is_ok());
    }

    #[test]
    fn node_faults_carry_routes() {
        let mut schema = Schema::new();
        schema
            .insert_model(
                ModelBuilder::new("validate_tests", "Broken")
                    .attribute("")
                    .build(),
            )
            .unwrap();

        let errs = validate_schema(&schema).unwrap_err();
        let rendered = errs.to_string();
        assert!(rendered.contains("validate_tests::Broken"));
        assert!(rendered.contains("attribute ident cannot be empty"));
    }
}
