//! End-to-end tests of the playlist pipeline against temporary media trees

mod e2e;
