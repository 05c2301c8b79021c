mod get_tags_use_case;

pub use get_tags_use_case::GetTagsUseCase;
