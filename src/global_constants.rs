pub const APPLICATION_TITLE: &str = "Radar de Fontes";

pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub const CONFIG_DIR_NAME: &str = "source-radar-pc";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Instruction sent to the model, with `{topic}` replaced by the user's
/// query. The classification rule for the two categories lives here.
pub const PROMPT_TEMPLATE: &str = "Encontre fontes para o assunto: \"{topic}\".\n\
    Por favor, retorne uma resposta estruturada contendo:\n\
    1. Um breve resumo sobre onde encontrar este conteúdo.\n\
    2. Uma lista de fontes dividida em:\n\
       - \"legal\" (streaming, sites oficiais, lojas autorizadas).\n\
       - \"alternative\" (fóruns, repositórios, sites de terceiros).\n\
    Seja direto e inclua os links encontrados.";

pub const GROUNDING_URLS_DISPLAY_LIMIT: usize = 5;
pub const DESCRIPTION_MAX_CHARS: usize = 160;

pub const HEADER_SUBTITLE: &str =
    "Encontre onde assistir, ler ou baixar conteúdos. Buscamos em fontes oficiais e comunidades alternativas em segundos.";
pub const SEARCH_PLACEHOLDER: &str =
    "Ex: 'Filme Matrix', 'Livro de Python', 'Software de edição'...";
pub const SEARCH_BUTTON_LABEL: &str = "Buscar";
pub const HERO_EMPTY_STATE: &str = "Digite um assunto para começar a exploração";
pub const SUGGESTED_TOPICS: &[&str] = &["Filme Matrix", "Livro de Python", "Software de edição"];

pub const SUMMARY_HEADING: &str = "Resumo da Busca";
pub const LEGAL_COLUMN_HEADING: &str = "Fontes Oficiais";
pub const ALTERNATIVE_COLUMN_HEADING: &str = "Alternativas";
pub const LEGAL_EMPTY_PLACEHOLDER: &str = "Nenhuma fonte oficial específica encontrada.";
pub const ALTERNATIVE_EMPTY_PLACEHOLDER: &str = "Nenhuma fonte alternativa encontrada.";
pub const GROUNDING_HEADING: &str = "Fontes consultadas";

pub const MESSAGE_SEARCH_FAILED: &str =
    "Ocorreu um erro ao buscar as informações. Tente novamente mais tarde.";
pub const MESSAGE_SERVICE_NOT_CONFIGURED: &str =
    "Serviço de busca não configurado. Defina a variável de ambiente GEMINI_API_KEY.";
pub const MESSAGE_SEARCH_TIMED_OUT: &str =
    "A busca demorou mais do que o esperado. Tente novamente.";

pub const FOOTER_DISCLAIMER: &str =
    "Os resultados são gerados via IA com base em dados públicos. Sempre verifique a segurança dos links antes de clicar.";
