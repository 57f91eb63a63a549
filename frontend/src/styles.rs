pub const PAGE: &str = "min-h-screen bg-gradient-to-b from-gray-900 via-gray-900 to-black text-white flex flex-col";
pub const HEADER: &str = "p-4 flex justify-end";
pub const ADMIN_LINK: &str = "p-2 rounded-full text-gray-600 hover:text-gray-300 hover:bg-gray-800/50 transition-colors";
pub const MAIN: &str = "flex-1 flex flex-col items-center justify-center px-4 pb-8";
pub const FOOTER: &str = "p-4 text-center";
pub const FOOTER_TEXT: &str = "text-gray-600 text-xs";

pub const EVENT_BADGE: &str = "flex items-center gap-2 mb-4 text-amber-400";
pub const EVENT_BADGE_TEXT: &str = "text-sm font-medium tracking-wider uppercase";
pub const TITLE: &str = "text-4xl md:text-6xl font-bold text-center mb-2 text-transparent bg-clip-text bg-gradient-to-r from-amber-300 to-yellow-500";
pub const SUBTITLE: &str = "text-gray-400 text-center mb-8 max-w-md";
pub const PRIZE_HINTS: &str = "mt-8 flex flex-wrap justify-center gap-2 max-w-md";
pub const PRIZE_CHIP: &str = "px-3 py-1 rounded-full bg-gray-800/70 text-gray-400 text-xs";

pub const MODAL_BACKDROP: &str = "fixed inset-0 bg-black/80 backdrop-blur-sm z-40";
pub const MODAL: &str = "fixed left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 w-[calc(100%-2rem)] max-w-md z-50";
pub const MODAL_WIDE: &str = "fixed left-1/2 top-1/2 -translate-x-1/2 -translate-y-1/2 w-[calc(100%-2rem)] max-w-lg z-50";
pub const MODAL_CARD: &str = "relative bg-gray-900 border border-gray-700/60 rounded-2xl shadow-2xl p-6 md:p-8";
pub const MODAL_CLOSE: &str = "absolute top-4 right-4 p-2 rounded-full text-gray-500 hover:text-gray-300 hover:bg-gray-800 transition-colors";
pub const MODAL_HEADER: &str = "text-center mb-6";
pub const MODAL_TITLE: &str = "text-2xl md:text-3xl font-bold text-white";
pub const MODAL_SUBTITLE: &str = "text-gray-400 mt-2";

pub const FORM: &str = "space-y-4";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-200";
pub const TEXT_ERROR: &str = "text-sm text-red-400";
pub const TEXT_HINT: &str = "text-xs text-center text-gray-500 mt-4";
pub const INPUT: &str = "mt-1 block w-full h-12 rounded-lg border-0 bg-gray-800 py-2 px-3 text-white shadow-sm ring-1 ring-inset ring-gray-700 placeholder:text-gray-500 focus:ring-2 focus:ring-amber-400";
pub const INPUT_ERROR: &str = "mt-1 block w-full h-12 rounded-lg border-0 bg-gray-800 py-2 px-3 text-white shadow-sm ring-2 ring-inset ring-red-500 focus:ring-2 focus:ring-red-500";
pub const INPUT_COMPACT: &str = "block w-full h-9 rounded-md border-0 bg-gray-800 px-3 text-sm text-white ring-1 ring-inset ring-gray-700 focus:ring-2 focus:ring-amber-400";
pub const SELECT_COMPACT: &str = "block w-full h-9 rounded-md border-0 bg-gray-800 px-3 text-sm text-white ring-1 ring-inset ring-gray-700";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-gray-900 bg-gradient-to-r from-amber-400 to-yellow-500 hover:from-amber-500 hover:to-yellow-600 shadow-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-700 text-gray-200 hover:bg-gray-800 transition-colors disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_GHOST_DANGER: &str = "p-2 rounded-lg text-gray-500 hover:text-red-400 hover:bg-red-900/20 transition-colors disabled:opacity-40 disabled:cursor-not-allowed";
pub const BUTTON_SUBMIT: &str = "w-full h-12 rounded-xl font-semibold text-gray-900 bg-gradient-to-r from-amber-400 to-yellow-500 hover:from-amber-500 hover:to-yellow-600 shadow-lg transition-all duration-300";

pub const ADMIN_PAGE: &str = "min-h-screen bg-gradient-to-b from-gray-900 via-gray-900 to-black text-white p-4 md:p-6";
pub const ADMIN_CONTAINER: &str = "max-w-6xl mx-auto";
pub const CARD: &str = "bg-gray-900/80 border border-gray-700/60 rounded-2xl shadow-xl p-6";
pub const CARD_TITLE: &str = "text-xl font-semibold text-white";
pub const CARD_TEXT: &str = "text-sm text-gray-400";

pub const TAB_LIST: &str = "inline-flex bg-gray-800/60 p-1 rounded-xl mb-6";
pub const TAB_ACTIVE: &str = "px-6 py-2 rounded-lg text-sm font-medium bg-amber-400 text-gray-900";
pub const TAB_INACTIVE: &str = "px-6 py-2 rounded-lg text-sm font-medium text-gray-300 hover:text-white transition-colors";

pub const TABLE: &str = "w-full text-left text-sm";
pub const TABLE_HEAD: &str = "text-gray-400 uppercase text-xs border-b border-gray-700";
pub const TABLE_CELL: &str = "px-3 py-3";
pub const TABLE_ROW: &str = "border-b border-gray-800";
pub const PRIZE_TAG: &str = "inline-flex px-2 py-1 rounded-md bg-amber-400/20 text-amber-300 text-xs font-medium";

pub const ALERT_ERROR: &str = "flex items-center gap-2 p-4 rounded-lg bg-red-900/20 border border-red-800/50 text-sm text-red-300 mb-6";
pub const ALERT_SUCCESS: &str = "flex items-center gap-2 p-4 rounded-lg bg-green-900/20 border border-green-800/50 text-sm text-green-300 mb-6";

pub const SEGMENT_ROW: &str = "flex items-center gap-4 p-4 rounded-xl bg-gray-800/40 border border-gray-700/60";
pub const SEGMENT_SWATCH: &str = "w-10 h-10 rounded-lg border-2 border-gray-700 flex-shrink-0";
pub const FIELD_LABEL_XS: &str = "text-xs text-gray-400 mb-1 block";
