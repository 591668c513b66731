pub mod fork;

#[derive(Debug)]
pub enum Action {
    Fork {
        from: String,
        to: String,
        region: Option<String>,
        space: Option<String>,
    },
}
