// This file is the module declaration file for the `builders` module.
// It declares the collaborators that sit between the command line and the
// `core` request model.

// `selection` module:
// Parses the textual `--lines` values (`7`, `1:5`, `1:5,10:12`) and feeds
// the resulting half-open ranges into a `FormatOptionsBuilder`.
pub mod selection;

// `validator` module:
// Applies the front-end's policy to a built request. It defines the
// `RequestValidator` trait and a `StandardValidator` implementation that
// reports flag combinations which cannot be honored together, such as
// reading stdin while also naming files.
pub mod validator;

// `reporter` module:
// Renders a finished request for people (console summary) or for other
// tools (JSON, YAML, TOML).
pub mod reporter;
