mod common;
mod loader;
mod minority;
mod service;
