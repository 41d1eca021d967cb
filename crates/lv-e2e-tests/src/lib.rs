//! End-to-end tests for LogView live under `tests/`.
