use std::sync::Once;
use wiremodel_schema::node::ModelBuilder;

pub(crate) const PERSON: &str = "test_fixtures::Person";
pub(crate) const AUTHOR: &str = "test_fixtures::Author";
pub(crate) const BOOK: &str = "test_fixtures::Book";
pub(crate) const SPECIAL_PERSON: &str = "test_fixtures::SpecialPerson";
pub(crate) const RAW_PERSON: &str = "test_fixtures::RawPerson";

static REGISTER: Once = Once::new();

/// Register the shared test models exactly once per process. The schema
/// registry is process-wide, so every test funnels through here.
pub(crate) fn register_fixtures() {
    REGISTER.call_once(|| {
        ModelBuilder::new("test_fixtures", "Person")
            .attribute("firstName")
            .attribute("lastName")
            .register()
            .expect("fixture schema: Person");

        ModelBuilder::new("test_fixtures", "Author")
            .extends(PERSON)
            .attribute("penName")
            .has_many("books")
            .has_one("publisher")
            .register()
            .expect("fixture schema: Author");

        // Unrelated model whose attribute name must not leak into Person.
        ModelBuilder::new("test_fixtures", "Book")
            .attribute("title")
            .register()
            .expect("fixture schema: Book");

        // Subclass of Person whose attribute must not leak upward.
        ModelBuilder::new("test_fixtures", "SpecialPerson")
            .extends(PERSON)
            .attribute("extraThing")
            .register()
            .expect("fixture schema: SpecialPerson");

        ModelBuilder::new("test_fixtures", "RawPerson")
            .camelize_keys(false)
            .attribute("first_name")
            .register()
            .expect("fixture schema: RawPerson");
    });
}
