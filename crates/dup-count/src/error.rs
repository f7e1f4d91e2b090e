#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Input is empty but at least one element is required")]
    Empty,

    #[error("Input is not sorted: element #{index} breaks the order")]
    Unsorted { index: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
