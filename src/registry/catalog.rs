use super::definition::{Category, CommandDefinition, ParamSpec};

/// The built-in command catalog, in palette order.
pub(super) fn builtin_commands() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(text_commands());
    commands.extend(file_commands());
    commands.extend(network_commands());
    commands.extend(system_commands());
    commands.extend(control_commands());
    commands
}

fn text_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("grep", "grep", Category::Text, "Search for patterns in text")
            .param(
                ParamSpec::text("pattern", "Pattern")
                    .required()
                    .placeholder("search term")
                    .describe("Regular expression or literal string to search for"),
            )
            .param(ParamSpec::boolean("ignoreCase", "Ignore case (-i)", "-i"))
            .param(
                ParamSpec::boolean("invertMatch", "Invert match (-v)", "-v")
                    .describe("Select non-matching lines"),
            )
            .param(ParamSpec::boolean("extendedRegex", "Extended regex (-E)", "-E"))
            .examples(&["grep 'error' log.txt", "grep -i 'warning' file.log"])
            .pipes(true, true),
        CommandDefinition::new(
            "sed",
            "sed",
            Category::Text,
            "Stream editor for filtering and transforming text",
        )
        .param(
            ParamSpec::text("expression", "Expression")
                .single_quoted()
                .required()
                .placeholder("s/old/new/g")
                .describe("sed command expression"),
        )
        .param(
            ParamSpec::boolean("inPlace", "In-place edit (-i)", "-i")
                .advanced()
                .describe("Edit file in place"),
        )
        .examples(&["sed 's/error/ERROR/g'"])
        .pipes(true, true),
        CommandDefinition::new(
            "awk",
            "awk",
            Category::Text,
            "Pattern-directed scanning and processing language",
        )
        .param(
            ParamSpec::text("program", "Program")
                .single_quoted()
                .required()
                .placeholder("{print $1}")
                .describe("awk program or script"),
        )
        .param(
            ParamSpec::text("fieldSeparator", "Field separator (-F)")
                .flag("-F {}")
                .advanced()
                .placeholder(":"),
        )
        .examples(&["awk '{print $1}'", "awk -F: '{print $1}'"])
        .pipes(true, true),
        CommandDefinition::new(
            "cut",
            "cut",
            Category::Text,
            "Remove sections from each line of files",
        )
        .param(
            ParamSpec::text("fields", "Fields")
                .flag("-f {}")
                .required()
                .placeholder("1,3,5")
                .describe("Field range or comma-separated list"),
        )
        .param(
            ParamSpec::text("delimiter", "Delimiter (-d)")
                .flag("-d {}")
                .placeholder(":")
                .default_value("\t"),
        )
        .examples(&["cut -d: -f1,3", "cut -c1-10"])
        .pipes(true, true),
        CommandDefinition::new("sort", "sort", Category::Text, "Sort lines of text files")
            .param(ParamSpec::boolean("reverse", "Reverse (-r)", "-r"))
            .param(ParamSpec::boolean("unique", "Unique (-u)", "-u"))
            .param(ParamSpec::boolean("numeric", "Numeric sort (-n)", "-n"))
            .examples(&["sort file.txt", "sort -rn numbers.txt"])
            .pipes(true, true),
        CommandDefinition::new("uniq", "uniq", Category::Text, "Report or omit repeated lines")
            .param(ParamSpec::boolean("count", "Count occurrences (-c)", "-c"))
            .param(ParamSpec::boolean("duplicates", "Only duplicates (-d)", "-d"))
            .examples(&["uniq file.txt", "uniq -c file.txt"])
            .pipes(true, true),
        CommandDefinition::new("tr", "tr", Category::Text, "Translate or delete characters")
            .param(
                ParamSpec::text("set1", "Replace from")
                    .required()
                    .placeholder("a-z"),
            )
            .param(
                ParamSpec::text("set2", "Replace to")
                    .placeholder("A-Z")
                    .describe("Leave empty to delete the characters of the first set"),
            )
            .examples(&["tr 'a-z' 'A-Z'", "tr -d ' '"])
            .pipes(true, true),
    ]
}

fn file_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "find",
            "find",
            Category::Files,
            "Search for files in a directory hierarchy",
        )
        .param(
            ParamSpec::file("path", "Start path")
                .placeholder(".")
                .default_value("."),
        )
        .param(
            ParamSpec::text("name", "Name pattern")
                .flag("-name {}")
                .placeholder("*.txt"),
        )
        .param(
            ParamSpec::select("type", "Type (-type)", &["f", "d", "l"])
                .flag("-type {}")
                .advanced()
                .describe("file, directory, or symlink"),
        )
        .examples(&["find . -name '*.log'", "find /home -type f -name 'test*'"])
        .pipes(false, true),
        CommandDefinition::new("ls", "ls", Category::Files, "List directory contents")
            .param(
                ParamSpec::file("path", "Directory")
                    .placeholder(".")
                    .default_value("."),
            )
            .param(ParamSpec::boolean("long", "Long format (-l)", "-l"))
            .param(ParamSpec::boolean("all", "Show hidden (-a)", "-a"))
            .param(ParamSpec::boolean("recursive", "Recursive (-R)", "-R"))
            .examples(&["ls -la", "ls -R /path"])
            .pipes(false, true),
        CommandDefinition::new("cp", "cp", Category::Files, "Copy files or directories")
            .param(ParamSpec::file("source", "Source").required())
            .param(ParamSpec::file("destination", "Destination").required())
            .param(ParamSpec::boolean("recursive", "Recursive (-r)", "-r"))
            .examples(&["cp file.txt backup.txt", "cp -r dir/ backup/"])
            .pipes(false, false),
        CommandDefinition::new("mv", "mv", Category::Files, "Move or rename files")
            .param(ParamSpec::file("source", "Source").required())
            .param(ParamSpec::file("destination", "Destination").required())
            .param(ParamSpec::boolean("force", "Force (-f)", "-f"))
            .examples(&["mv old.txt new.txt", "mv file.txt /archive/"])
            .pipes(false, false),
        CommandDefinition::new("rm", "rm", Category::Files, "Remove files or directories")
            .param(ParamSpec::file("target", "Target file/directory").required())
            .param(ParamSpec::boolean("recursive", "Recursive (-r)", "-r"))
            .param(ParamSpec::boolean("force", "Force (-f)", "-f"))
            .examples(&["rm file.txt", "rm -rf directory/"])
            .pipes(false, false),
        CommandDefinition::new("chmod", "chmod", Category::Files, "Change file mode bits")
            .param(ParamSpec::text("mode", "Mode").required().placeholder("755"))
            .param(ParamSpec::file("target", "Target").required())
            .examples(&["chmod 755 script.sh", "chmod +x file.sh"])
            .pipes(false, false),
    ]
}

fn network_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "curl",
            "curl",
            Category::Network,
            "Transfer data from or to a server",
        )
        .param(
            ParamSpec::text("url", "URL")
                .required()
                .placeholder("https://example.com"),
        )
        .param(
            ParamSpec::select("method", "Method (-X)", &["GET", "POST", "PUT", "DELETE", "PATCH"])
                .flag("-X {}")
                .default_value("GET"),
        )
        .param(
            ParamSpec::text("headers", "Headers (-H)")
                .flag("-H {}")
                .advanced()
                .placeholder("Content-Type: application/json"),
        )
        .param(
            ParamSpec::text("data", "Data (-d)")
                .flag("-d {}")
                .single_quoted()
                .advanced(),
        )
        .examples(&["curl https://api.example.com", "curl -X POST -d '{}'"])
        .pipes(false, true),
        CommandDefinition::new("wget", "wget", Category::Network, "Download files from the web")
            .param(ParamSpec::text("url", "URL").required())
            .param(
                ParamSpec::file("output", "Output file (-O)")
                    .flag("-O {}")
                    .advanced(),
            )
            .examples(&["wget https://example.com/file.zip"])
            .pipes(false, true),
        CommandDefinition::new("ssh", "ssh", Category::Network, "Secure shell remote login")
            .param(
                ParamSpec::text("host", "Host")
                    .required()
                    .placeholder("user@hostname"),
            )
            .param(
                ParamSpec::text("command", "Command")
                    .single_quoted()
                    .advanced(),
            )
            .examples(&["ssh user@host", "ssh user@host 'ls /home'"])
            .pipes(false, true),
        CommandDefinition::new(
            "scp",
            "scp",
            Category::Network,
            "Secure copy (remote file copy program)",
        )
        .param(ParamSpec::text("source", "Source").required())
        .param(ParamSpec::text("destination", "Destination").required())
        .examples(&["scp file.txt user@host:/path/", "scp -r dir/ user@host:"])
        .pipes(false, false),
    ]
}

fn system_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "ps",
            "ps",
            Category::System,
            "Report a snapshot of current processes",
        )
        .param(ParamSpec::boolean("aux", "Show all (-aux)", "aux"))
        .examples(&["ps aux", "ps aux | grep java"])
        .pipes(false, true),
        CommandDefinition::new("top", "top", Category::System, "Display Linux processes")
            .param(ParamSpec::boolean("batch", "Batch mode (-b)", "-b").advanced())
            .examples(&["top -b"])
            .pipes(false, true),
        CommandDefinition::new(
            "df",
            "df",
            Category::System,
            "Report file system disk space usage",
        )
        .param(ParamSpec::boolean("human", "Human readable (-h)", "-h"))
        .examples(&["df -h"])
        .pipes(false, true),
        CommandDefinition::new("du", "du", Category::System, "Estimate file space usage")
            .param(ParamSpec::boolean("human", "Human readable (-h)", "-h"))
            .param(ParamSpec::boolean("summarize", "Summarize (-s)", "-s"))
            .examples(&["du -sh /home", "du -h /path"])
            .pipes(false, true),
    ]
}

fn control_commands() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("if", "if/then/else", Category::Control, "Conditional block")
            .param(
                ParamSpec::text("condition", "Condition")
                    .required()
                    .placeholder("[ -f file.txt ]"),
            )
            .examples(&["[ -f file.txt ]", "[ $var -eq 0 ]"]),
        CommandDefinition::new("for", "for loop", Category::Control, "Loop over values")
            .param(ParamSpec::text("variable", "Variable").required().placeholder("i"))
            .param(
                ParamSpec::text("values", "Values/Range")
                    .required()
                    .placeholder("1 2 3 or {1..10}"),
            )
            .examples(&["for i in 1 2 3", "for file in *.txt"]),
        CommandDefinition::new(
            "while",
            "while loop",
            Category::Control,
            "Loop while condition is true",
        )
        .param(
            ParamSpec::text("condition", "Condition")
                .required()
                .placeholder("[ $i -lt 10 ]"),
        )
        .examples(&["[ $i -lt 10 ]"]),
    ]
}
