pub mod matrix_transpose;
