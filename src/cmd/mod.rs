pub mod generate;
pub mod get;
pub mod url;
pub mod validate;

pub enum CommandType {
    Generate,
    Get,
    Validate,
    Url,
}

impl CommandType {
    pub fn as_str(&self) -> &str {
        match self {
            CommandType::Generate => "generate",
            CommandType::Get => "get",
            CommandType::Validate => "validate",
            CommandType::Url => "url",
        }
    }
}
