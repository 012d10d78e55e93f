use crate::{err, error::ErrorTree, node::Schema, types::Cardinality};
use std::collections::{BTreeMap, BTreeSet};

/// Schema-wide inheritance invariants: every `extends` target exists, no
/// ancestor chain cycles, and no relationship name is redeclared with a
/// conflicting cardinality anywhere along a chain.
pub fn validate_inheritance(schema: &Schema, errs: &mut ErrorTree) {
    for (path, model) in schema.models() {
        if let Some(parent) = model.extends
            && schema.get_model(parent).is_none()
        {
            err!(errs, "model '{path}' extends unknown model '{parent}'");
            continue;
        }

        let mut seen = BTreeSet::new();
        let mut cardinalities = BTreeMap::<String, (Cardinality, String)>::new();
        let mut cursor = Some(path.to_string());

        while let Some(p) = cursor {
            if !seen.insert(p.clone()) {
                err!(errs, "inheritance cycle through '{p}' reached from '{path}'");
                break;
            }
            let Some(node) = schema.get_model(&p) else {
                // Missing ancestors further up the chain are reported by
                // the model that declares them.
                break;
            };

            for rel in node.relationships.iter() {
                let name = node.canonical(rel.ident);
                match cardinalities.get(&name) {
                    Some((cardinality, declared_in)) if *cardinality != rel.cardinality => {
                        err!(
                            errs,
                            "relationship '{name}' on '{path}' declared as {} in '{p}' but {} in '{declared_in}'",
                            rel.cardinality,
                            cardinality,
                        );
                    }
                    Some(_) => {}
                    None => {
                        cardinalities.insert(name, (rel.cardinality, p.clone()));
                    }
                }
            }

            cursor = node.extends.map(str::to_string);
        }
    }
}
