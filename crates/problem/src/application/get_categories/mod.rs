mod get_categories_use_case;

pub use get_categories_use_case::GetCategoriesUseCase;
