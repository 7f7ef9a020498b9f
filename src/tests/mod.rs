// Test modules for classifieds-api-suite crate
//
// Each source file has a corresponding test file focused on its own
// behavior. Tests that need an HTTP server live in the crate's tests/
// directory, where a wiremock stand-in replaces the remote service.
