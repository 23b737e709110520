// Admin front-end: sign-in flow (always compiled) and CSR components (csr feature)
pub mod admin;
