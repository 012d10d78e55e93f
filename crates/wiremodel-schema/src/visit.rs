use crate::{error::ErrorTree, node::ValidateNode};

///
/// Visitor
///
/// Depth-first traversal over schema nodes. `enter`/`exit` track the
/// route; `validate` is invoked once per node between them.
///

pub trait Visitor {
    fn enter(&mut self, key: &str);
    fn exit(&mut self);
    fn validate(&mut self, node: &dyn ValidateNode);
}

///
/// ValidateVisitor
/// Collects node-local validation faults with route-aware aggregation.
///

#[derive(Debug, Default)]
pub struct ValidateVisitor {
    pub errors: ErrorTree,
    route: Vec<String>,
}

impl ValidateVisitor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn current_route(&self) -> String {
        self.route
            .iter()
            .filter(|key| !key.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl Visitor for ValidateVisitor {
    fn enter(&mut self, key: &str) {
        self.route.push(key.to_string());
    }

    fn exit(&mut self) {
        self.route.pop();
    }

    fn validate(&mut self, node: &dyn ValidateNode) {
        if let Err(tree) = node.validate() {
            let route = self.current_route();
            self.errors.merge_at(&route, tree);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysBad;

    impl ValidateNode for AlwaysBad {
        fn validate(&self) -> Result<(), ErrorTree> {
            let mut errs = ErrorTree::new();
            errs.add("broken");
            errs.result()
        }
    }

    #[test]
    fn routes_follow_enter_exit() {
        let mut visitor = ValidateVisitor::new();
        visitor.enter("outer");
        visitor.enter("inner");
        visitor.validate(&AlwaysBad);
        visitor.exit();
        visitor.validate(&AlwaysBad);
        visitor.exit();

        let routes: Vec<_> = visitor.errors.entries().map(|e| e.route.clone()).collect();
        assert_eq!(routes, vec!["outer.inner".to_string(), "outer".to_string()]);
    }
}
