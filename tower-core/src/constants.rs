//! Game constants: defaults for a fresh round and the built-in word list.

// =====================================================
// Round defaults
// =====================================================

/// Map dimensions (x, y, z) used until the upstream API reports its own.
pub const DEFAULT_MAP_SIZE: [i32; 3] = [30, 30, 100];
pub const DEFAULT_NEXT_TURN_SECS: u32 = 60;
pub const DEFAULT_ROUND_DURATION_SECS: i64 = 5 * 60;
pub const MAX_ROUND_DURATION_SECS: i64 = 24 * 60 * 60;
/// Shuffles granted per round.
pub const DEFAULT_SHUFFLE_ALLOWANCE: u32 = 3;
pub const FIRST_TURN: u32 = 1;

/// Words handed out per shuffle by the offline gateway.
pub const OFFLINE_POOL_SIZE: usize = 12;

// =====================================================
// Error codes (stable, caller-visible)
// =====================================================

pub const CODE_INVALID_REQUEST: u32 = 1000;
pub const CODE_WORD_ALREADY_USED: u32 = 1001;
pub const CODE_UNKNOWN_WORD: u32 = 1002;
pub const CODE_NO_SHUFFLES_LEFT: u32 = 2001;
pub const CODE_WORD_RESOLUTION: u32 = 2002;
pub const CODE_UPSTREAM_UNAVAILABLE: u32 = 5001;

// =====================================================
// Built-in catalog
// =====================================================

/// The fixed word universe. Ids are assigned 1..=N in this order.
pub const BUILTIN_WORDS: [&str; 230] = [
    "извратитель",
    "феноменология",
    "необъективность",
    "предплужник",
    "человеконенавистник",
    "подвозчица",
    "насадка",
    "лопушник",
    "обводчик",
    "онанист",
    "копуляция",
    "сизаль",
    "куркума",
    "мостовина",
    "пальба",
    "ясачник",
    "подсек",
    "собранность",
    "иммиграция",
    "придача",
    "электричка",
    "ихтиоз",
    "пчеловод",
    "предвестие",
    "гудронатор",
    "швейцарец",
    "детская",
    "армянин",
    "циркон",
    "чревоугодник",
    "счёска",
    "кутание",
    "погромщик",
    "полеводство",
    "передумывание",
    "успокоение",
    "переборщица",
    "дягиль",
    "космополитка",
    "ныряло",
    "мануфактурсоветник",
    "сардоникс",
    "туземка",
    "некомпетентность",
    "палас",
    "сутяжник",
    "бытовизм",
    "пылкость",
    "многомужие",
    "валидол",
    "парадизка",
    "прозодежда",
    "нечаянность",
    "обдирание",
    "разъяснитель",
    "мерка",
    "защитник",
    "соковыжималка",
    "наказуемость",
    "фикция",
    "подстраивание",
    "остойчивость",
    "опрощенец",
    "подвиливание",
    "взаимопроникновение",
    "сложность",
    "ларчик",
    "сочевичник",
    "перестрагивание",
    "синхронизм",
    "диагностирование",
    "оживка",
    "заслушание",
    "индейководство",
    "дешифратор",
    "лахтак",
    "пруссак",
    "брас",
    "наёмничество",
    "копировщик",
    "отмывание",
    "культпоход",
    "предстоящее",
    "алеут",
    "лампион",
    "замуровывание",
    "гаммаустановка",
    "маслодел",
    "неграмотность",
    "неразличимость",
    "штундизм",
    "причащение",
    "полифония",
    "кувыркание",
    "кан",
    "недогляд",
    "магичность",
    "синеватость",
    "клавикорд",
    "коммивояжёрство",
    "куранта",
    "издольщик",
    "майордом",
    "европеизация",
    "хлёсткость",
    "выверение",
    "флотилия",
    "фитиль",
    "идолопоклонство",
    "возникновение",
    "пасьянс",
    "микрорайон",
    "скальд",
    "подвижник",
    "вендетта",
    "неразвитость",
    "келейник",
    "порез",
    "допашка",
    "зюйд",
    "кольт",
    "атака",
    "прополис",
    "злостность",
    "склёпывание",
    "корд",
    "характеристичность",
    "гнездование",
    "отбой",
    "экстернат",
    "сапонин",
    "биогеоценология",
    "модернистка",
    "федералист",
    "осведомительница",
    "изгнание",
    "продукт",
    "шквара",
    "миноискатель",
    "колодезь",
    "усекание",
    "разгадчица",
    "коринка",
    "подслащивание",
    "ихтиология",
    "рассылание",
    "лимфоцит",
    "торошение",
    "перезарядка",
    "неумолимость",
    "блондин",
    "верховенство",
    "переснащивание",
    "плис",
    "мужественность",
    "агитация",
    "взвывание",
    "закройная",
    "землепашец",
    "недокос",
    "кирзач",
    "трапезарь",
    "крем",
    "нейропатология",
    "невольница",
    "тыквина",
    "классика",
    "скип",
    "гагаузка",
    "налокотник",
    "крахмаление",
    "келейница",
    "доктринёрство",
    "прожировка",
    "югослав",
    "неточность",
    "недоброжелательность",
    "подтаптывание",
    "слушательница",
    "поярок",
    "умирание",
    "рассечение",
    "наличник",
    "хлорофилл",
    "соглядатайство",
    "шествие",
    "регистратура",
    "навозоразбрасыватель",
    "порция",
    "правдолюбие",
    "кабель",
    "примирённость",
    "мраморщик",
    "цежение",
    "моторизация",
    "штабквартира",
    "тигрёнок",
    "замерзание",
    "ворожей",
    "развальца",
    "испытание",
    "кровельщик",
    "невыгодность",
    "страусятина",
    "сберегание",
    "распря",
    "лёсс",
    "тактильность",
    "даурка",
    "рецидивистка",
    "душевность",
    "привой",
    "корнетист",
    "подвязка",
    "дарение",
    "комизм",
    "соединитель",
    "автотягач",
    "кокаин",
    "подсол",
    "синтепон",
    "монарх",
    "жеребьёвка",
    "артишок",
    "клятвопреступление",
    "пристрагивание",
    "тюркизм",
    "разбежка",
    "прогрессивность",
    "опутывание",
];
