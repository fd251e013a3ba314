pub mod json_translation_loader;
