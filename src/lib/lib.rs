pub mod rozklad;
