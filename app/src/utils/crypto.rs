/// Random url-safe id for entity primary keys.
pub fn generate_uuid() -> String {
    nanoid::nanoid!()
}
