//! # Help Text
//!
//! Displayed to the user via the `help` command or an unrecognized one.
//! Commands sit in code spans so markdown renders `<project>` literally.

pub fn main(prefix: &str) -> String {
    format!(
        concat!(
            "**CircleCI Help**\n",
            "\n",
            "* `{p} status <project> [branch]`: Current build status\n",
            "* `{p} last <project> [branch]`: Status of the last finished build\n",
            "* `{p} retry <project> <build_num|last>`: Retry a build\n",
            "* `{p} retry all <success|failed>`: Retry the last build of every matching project\n",
            "* `{p} list <success|failed>`: Projects whose last build has that status\n",
            "* `{p} cancel <project> <build_num>`: Cancel a build\n",
            "* `{p} clear <project|all>`: Clear build caches\n",
            "\n",
            "Projects without an `org/` use the configured default organization.\n"
        ),
        p = prefix
    )
}
