use std::path::PathBuf;

xflags::xflags! {
    /// Fetch, upload and delete nanopublications on a TWDB server.
    cmd twdb {
        /// TOML client configuration file.
        optional -c, --config config: PathBuf
        /// Server base URL, overrides the configuration file.
        optional --base-url base_url: String

        /// Print a nanopublication in TriG.
        cmd get {
            required uri: String
        }
        /// Upload a nanopublication from a .trig or .nq file.
        cmd put {
            required file: PathBuf
        }
        /// Delete a nanopublication.
        cmd delete {
            required uri: String
        }
    }
}
