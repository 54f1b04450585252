//! Neovim LSP bindings.
//!
//! Language-server groups repeat some generic entries (`gd`, `K`) on purpose
//! so each group reads as a complete cheat sheet for that server.

use super::Binding;

const BINDINGS: &[(&str, &str, &str)] = &[
    // Navigation
    ("gd", "Go to Definition", "Navigation"),
    ("gD", "Go to Declaration", "Navigation"),
    ("gi", "Go to Implementation", "Navigation"),
    ("gr", "List References", "Navigation"),
    ("gy", "Go to Type Definition", "Navigation"),
    ("Ctrl + o", "Jump Back", "Navigation"),
    ("Ctrl + i", "Jump Forward", "Navigation"),
    ("Ctrl + ]", "Jump to Definition (Tag Stack)", "Navigation"),
    ("<leader>ds", "Document Symbols", "Navigation"),
    ("<leader>ws", "Workspace Symbols", "Navigation"),
    // Documentation
    ("K", "Hover Documentation", "Documentation"),
    ("K K", "Focus Hover Window", "Documentation"),
    ("gK", "Signature Help", "Documentation"),
    ("Ctrl + k (insert)", "Signature Help", "Documentation"),
    ("<leader>th", "Toggle Inlay Hints", "Documentation"),
    // Code actions
    ("<leader>ca", "Code Action", "Code Actions"),
    (
        "<leader>ca (visual)",
        "Code Action for Selection",
        "Code Actions",
    ),
    ("<leader>rn", "Rename Symbol", "Code Actions"),
    ("<leader>cl", "Run Code Lens", "Code Actions"),
    ("<leader>cL", "Refresh Code Lens", "Code Actions"),
    ("<leader>oi", "Organize Imports", "Code Actions"),
    // Diagnostics
    ("[d", "Previous Diagnostic", "Diagnostics"),
    ("]d", "Next Diagnostic", "Diagnostics"),
    ("[e", "Previous Error", "Diagnostics"),
    ("]e", "Next Error", "Diagnostics"),
    ("[w", "Previous Warning", "Diagnostics"),
    ("]w", "Next Warning", "Diagnostics"),
    ("<leader>e", "Show Line Diagnostics", "Diagnostics"),
    ("<leader>q", "Diagnostics to Location List", "Diagnostics"),
    ("<leader>dq", "Diagnostics to Quickfix List", "Diagnostics"),
    ("<leader>td", "Toggle Diagnostics", "Diagnostics"),
    ("<leader>dv", "Toggle Virtual Text", "Diagnostics"),
    // Formatting
    ("<leader>f", "Format Buffer", "Formatting"),
    ("<leader>f (visual)", "Format Selection", "Formatting"),
    ("<leader>tf", "Toggle Format on Save", "Formatting"),
    // Workspace
    ("<leader>wa", "Add Workspace Folder", "Workspace"),
    ("<leader>wr", "Remove Workspace Folder", "Workspace"),
    ("<leader>wl", "List Workspace Folders", "Workspace"),
    (":LspInfo", "Show Attached Servers", "Workspace"),
    (":LspRestart", "Restart Language Servers", "Workspace"),
    (":LspStart", "Start Language Server", "Workspace"),
    (":LspStop", "Stop Language Server", "Workspace"),
    (":LspLog", "Open LSP Log", "Workspace"),
    (":Mason", "Manage Language Servers", "Workspace"),
    (":MasonUpdate", "Update Server Registry", "Workspace"),
    // Completion
    ("Ctrl + Space", "Trigger Completion", "Completion"),
    ("Ctrl + n", "Next Completion Item", "Completion"),
    ("Ctrl + p", "Previous Completion Item", "Completion"),
    ("Ctrl + y", "Confirm Completion", "Completion"),
    ("Enter", "Confirm Selected Item", "Completion"),
    ("Ctrl + e", "Abort Completion", "Completion"),
    ("Ctrl + b", "Scroll Docs Up", "Completion"),
    ("Ctrl + f", "Scroll Docs Down", "Completion"),
    ("Tab", "Next Snippet Placeholder", "Completion"),
    ("Shift + Tab", "Previous Snippet Placeholder", "Completion"),
    // Call hierarchy
    ("<leader>ci", "Incoming Calls", "Call Hierarchy"),
    ("<leader>co", "Outgoing Calls", "Call Hierarchy"),
    // Telescope
    ("<leader>fr", "References (Telescope)", "Telescope"),
    ("<leader>fd", "Definitions (Telescope)", "Telescope"),
    ("<leader>fi", "Implementations (Telescope)", "Telescope"),
    ("<leader>ft", "Type Definitions (Telescope)", "Telescope"),
    ("<leader>fs", "Document Symbols (Telescope)", "Telescope"),
    ("<leader>fS", "Workspace Symbols (Telescope)", "Telescope"),
    ("<leader>fD", "Diagnostics (Telescope)", "Telescope"),
    ("<leader>fc", "Incoming Calls (Telescope)", "Telescope"),
    ("<leader>fo", "Outgoing Calls (Telescope)", "Telescope"),
    // Trouble
    ("<leader>xx", "Toggle Workspace Diagnostics", "Trouble"),
    ("<leader>xX", "Toggle Buffer Diagnostics", "Trouble"),
    ("<leader>xs", "Toggle Symbols", "Trouble"),
    ("<leader>xl", "Toggle LSP Definitions/References", "Trouble"),
    ("<leader>xq", "Toggle Quickfix List", "Trouble"),
    ("<leader>xL", "Toggle Location List", "Trouble"),
    // rust-analyzer
    ("gd", "Go to Definition", "Rust (rust-analyzer)"),
    ("K", "Hover Actions", "Rust (rust-analyzer)"),
    ("<leader>rr", "Runnables", "Rust (rust-analyzer)"),
    ("<leader>rd", "Debuggables", "Rust (rust-analyzer)"),
    ("<leader>rt", "Testables", "Rust (rust-analyzer)"),
    (
        "<leader>re",
        "Expand Macro Recursively",
        "Rust (rust-analyzer)",
    ),
    ("<leader>rc", "Open Cargo.toml", "Rust (rust-analyzer)"),
    ("<leader>rp", "Go to Parent Module", "Rust (rust-analyzer)"),
    ("<leader>rj", "Join Lines", "Rust (rust-analyzer)"),
    ("<leader>rm", "Rebuild Proc Macros", "Rust (rust-analyzer)"),
    ("<leader>rx", "Explain Error", "Rust (rust-analyzer)"),
    ("<leader>rD", "Render Diagnostic", "Rust (rust-analyzer)"),
    (
        "<leader>rJ / <leader>rK",
        "Move Item Down/Up",
        "Rust (rust-analyzer)",
    ),
    // gopls
    ("gd", "Go to Definition", "Go (gopls)"),
    ("<leader>gt", "Add Struct Tags", "Go (gopls)"),
    ("<leader>gT", "Remove Struct Tags", "Go (gopls)"),
    ("<leader>ge", "Insert if err != nil", "Go (gopls)"),
    ("<leader>gf", "Fill Struct", "Go (gopls)"),
    ("<leader>gc", "Generate Test for Function", "Go (gopls)"),
    ("<leader>gi", "Organize Imports", "Go (gopls)"),
    ("<leader>gr", "Run Package Tests", "Go (gopls)"),
    // tsserver
    ("gd", "Go to Definition", "TypeScript (tsserver)"),
    ("gS", "Go to Source Definition", "TypeScript (tsserver)"),
    ("<leader>to", "Organize Imports", "TypeScript (tsserver)"),
    (
        "<leader>tu",
        "Remove Unused Imports",
        "TypeScript (tsserver)",
    ),
    ("<leader>ta", "Add Missing Imports", "TypeScript (tsserver)"),
    ("<leader>tF", "Fix All", "TypeScript (tsserver)"),
    ("<leader>tr", "Rename File", "TypeScript (tsserver)"),
    // pyright
    ("gd", "Go to Definition", "Python (pyright)"),
    ("<leader>po", "Organize Imports", "Python (pyright)"),
    (
        "<leader>pv",
        "Select Virtual Environment",
        "Python (pyright)",
    ),
    ("<leader>pi", "Set Python Path", "Python (pyright)"),
    // clangd
    ("gd", "Go to Definition", "C/C++ (clangd)"),
    ("<leader>ch", "Switch Source/Header", "C/C++ (clangd)"),
    ("<leader>ct", "Type Hierarchy", "C/C++ (clangd)"),
    ("<leader>cs", "Symbol Info", "C/C++ (clangd)"),
    ("<leader>cm", "Memory Usage", "C/C++ (clangd)"),
    ("<leader>cA", "Show AST", "C/C++ (clangd)"),
    // lua_ls
    ("gd", "Go to Definition", "Lua (lua_ls)"),
    ("K", "Hover Documentation", "Lua (lua_ls)"),
    ("<leader>lr", "Reload Workspace Library", "Lua (lua_ls)"),
];

pub fn bindings() -> Vec<Binding> {
    Binding::from_table(BINDINGS)
}
