//! Template library compiled into the binary
//!
//! Paths are relative to `templates/webapp/` at the workspace root.

/// Library metadata (`template.yaml`)
pub const MANIFEST: &str = include_str!("../../../../templates/webapp/template.yaml");

/// Template id → raw file contents
pub const FILES: &[(&str, &[u8])] = &[
    (
        "gulpfile.js",
        include_bytes!("../../../../templates/webapp/gulpfile.js"),
    ),
    (
        "_package.json",
        include_bytes!("../../../../templates/webapp/_package.json"),
    ),
    (
        "babelrc",
        include_bytes!("../../../../templates/webapp/babelrc"),
    ),
    (
        "gitignore",
        include_bytes!("../../../../templates/webapp/gitignore"),
    ),
    (
        "gitattributes",
        include_bytes!("../../../../templates/webapp/gitattributes"),
    ),
    (
        "bowerrc",
        include_bytes!("../../../../templates/webapp/bowerrc"),
    ),
    (
        "editorconfig",
        include_bytes!("../../../../templates/webapp/editorconfig"),
    ),
    (
        "favicon.ico",
        include_bytes!("../../../../templates/webapp/favicon.ico"),
    ),
    (
        "apple-touch-icon.png",
        include_bytes!("../../../../templates/webapp/apple-touch-icon.png"),
    ),
    (
        "robots.txt",
        include_bytes!("../../../../templates/webapp/robots.txt"),
    ),
    (
        "main.scss",
        include_bytes!("../../../../templates/webapp/main.scss"),
    ),
    (
        "main.css",
        include_bytes!("../../../../templates/webapp/main.css"),
    ),
    (
        "styles/fonts.scss",
        include_bytes!("../../../../templates/webapp/styles/fonts.scss"),
    ),
    (
        "styles/mixins.scss",
        include_bytes!("../../../../templates/webapp/styles/mixins.scss"),
    ),
    (
        "styles/styles.scss",
        include_bytes!("../../../../templates/webapp/styles/styles.scss"),
    ),
    (
        "styles/variables.scss",
        include_bytes!("../../../../templates/webapp/styles/variables.scss"),
    ),
    (
        "main.js",
        include_bytes!("../../../../templates/webapp/main.js"),
    ),
    (
        "index.html",
        include_bytes!("../../../../templates/webapp/index.html"),
    ),
    (
        "index.pug",
        include_bytes!("../../../../templates/webapp/index.pug"),
    ),
    (
        "_includes/config.pug",
        include_bytes!("../../../../templates/webapp/_includes/config.pug"),
    ),
    (
        "_includes/head.pug",
        include_bytes!("../../../../templates/webapp/_includes/head.pug"),
    ),
    (
        "_includes/header.pug",
        include_bytes!("../../../../templates/webapp/_includes/header.pug"),
    ),
    (
        "_includes/footer.pug",
        include_bytes!("../../../../templates/webapp/_includes/footer.pug"),
    ),
    (
        "_includes/mixins.pug",
        include_bytes!("../../../../templates/webapp/_includes/mixins.pug"),
    ),
    (
        "_includes/foot-scripts.pug",
        include_bytes!("../../../../templates/webapp/_includes/foot-scripts.pug"),
    ),
    (
        "_layouts/default.pug",
        include_bytes!("../../../../templates/webapp/_layouts/default.pug"),
    ),
    (
        "_mixins/example.pug",
        include_bytes!("../../../../templates/webapp/_mixins/example.pug"),
    ),
    (
        "_modules/example.pug",
        include_bytes!("../../../../templates/webapp/_modules/example.pug"),
    ),
    (
        "test/mocha/index.html",
        include_bytes!("../../../../templates/webapp/test/mocha/index.html"),
    ),
    (
        "test/mocha/test.js",
        include_bytes!("../../../../templates/webapp/test/mocha/test.js"),
    ),
    (
        "test/mocha/bower.json",
        include_bytes!("../../../../templates/webapp/test/mocha/bower.json"),
    ),
    (
        "test/jasmine/index.html",
        include_bytes!("../../../../templates/webapp/test/jasmine/index.html"),
    ),
    (
        "test/jasmine/test.js",
        include_bytes!("../../../../templates/webapp/test/jasmine/test.js"),
    ),
    (
        "test/jasmine/bower.json",
        include_bytes!("../../../../templates/webapp/test/jasmine/bower.json"),
    ),
];
