#[derive(Clone, Debug)]
pub enum DetailsMessage {
    Back,
}
