//! MSAA numeric constants: child IDs, object IDs, roles, states,
//! navigation directions, WinEvent kinds and hook flags.

/// Child ID addressing the object itself rather than one of its simple children.
pub const CHILDID_SELF: i32 = 0;

// Object IDs
pub const OBJID_WINDOW: i32 = 0;
pub const OBJID_SYSMENU: i32 = -1;
pub const OBJID_TITLEBAR: i32 = -2;
pub const OBJID_MENU: i32 = -3;
pub const OBJID_CLIENT: i32 = -4;
pub const OBJID_VSCROLL: i32 = -5;
pub const OBJID_HSCROLL: i32 = -6;
pub const OBJID_SIZEGRIP: i32 = -7;
pub const OBJID_CARET: i32 = -8;
pub const OBJID_CURSOR: i32 = -9;
pub const OBJID_ALERT: i32 = -10;
pub const OBJID_SOUND: i32 = -11;

// Roles
pub const ROLE_SYSTEM_TITLEBAR: u32 = 1;
pub const ROLE_SYSTEM_MENUBAR: u32 = 2;
pub const ROLE_SYSTEM_SCROLLBAR: u32 = 3;
pub const ROLE_SYSTEM_GRIP: u32 = 4;
pub const ROLE_SYSTEM_SOUND: u32 = 5;
pub const ROLE_SYSTEM_CURSOR: u32 = 6;
pub const ROLE_SYSTEM_CARET: u32 = 7;
pub const ROLE_SYSTEM_ALERT: u32 = 8;
pub const ROLE_SYSTEM_WINDOW: u32 = 9;
pub const ROLE_SYSTEM_CLIENT: u32 = 10;
pub const ROLE_SYSTEM_MENUPOPUP: u32 = 11;
pub const ROLE_SYSTEM_MENUITEM: u32 = 12;
pub const ROLE_SYSTEM_TOOLTIP: u32 = 13;
pub const ROLE_SYSTEM_APPLICATION: u32 = 14;
pub const ROLE_SYSTEM_DOCUMENT: u32 = 15;
pub const ROLE_SYSTEM_PANE: u32 = 16;
pub const ROLE_SYSTEM_CHART: u32 = 17;
pub const ROLE_SYSTEM_DIALOG: u32 = 18;
pub const ROLE_SYSTEM_BORDER: u32 = 19;
pub const ROLE_SYSTEM_GROUPING: u32 = 20;
pub const ROLE_SYSTEM_SEPARATOR: u32 = 21;
pub const ROLE_SYSTEM_TOOLBAR: u32 = 22;
pub const ROLE_SYSTEM_STATUSBAR: u32 = 23;
pub const ROLE_SYSTEM_TABLE: u32 = 24;
pub const ROLE_SYSTEM_COLUMNHEADER: u32 = 25;
pub const ROLE_SYSTEM_ROWHEADER: u32 = 26;
pub const ROLE_SYSTEM_COLUMN: u32 = 27;
pub const ROLE_SYSTEM_ROW: u32 = 28;
pub const ROLE_SYSTEM_CELL: u32 = 29;
pub const ROLE_SYSTEM_LINK: u32 = 30;
pub const ROLE_SYSTEM_HELPBALLOON: u32 = 31;
pub const ROLE_SYSTEM_CHARACTER: u32 = 32;
pub const ROLE_SYSTEM_LIST: u32 = 33;
pub const ROLE_SYSTEM_LISTITEM: u32 = 34;
pub const ROLE_SYSTEM_OUTLINE: u32 = 35;
pub const ROLE_SYSTEM_OUTLINEITEM: u32 = 36;
pub const ROLE_SYSTEM_PAGETAB: u32 = 37;
pub const ROLE_SYSTEM_PROPERTYPAGE: u32 = 38;
pub const ROLE_SYSTEM_INDICATOR: u32 = 39;
pub const ROLE_SYSTEM_GRAPHIC: u32 = 40;
pub const ROLE_SYSTEM_STATICTEXT: u32 = 41;
pub const ROLE_SYSTEM_TEXT: u32 = 42;
pub const ROLE_SYSTEM_PUSHBUTTON: u32 = 43;
pub const ROLE_SYSTEM_CHECKBUTTON: u32 = 44;
pub const ROLE_SYSTEM_RADIOBUTTON: u32 = 45;
pub const ROLE_SYSTEM_COMBOBOX: u32 = 46;
pub const ROLE_SYSTEM_DROPLIST: u32 = 47;
pub const ROLE_SYSTEM_PROGRESSBAR: u32 = 48;
pub const ROLE_SYSTEM_DIAL: u32 = 49;
pub const ROLE_SYSTEM_HOTKEYFIELD: u32 = 50;
pub const ROLE_SYSTEM_SLIDER: u32 = 51;
pub const ROLE_SYSTEM_SPINBUTTON: u32 = 52;
pub const ROLE_SYSTEM_DIAGRAM: u32 = 53;
pub const ROLE_SYSTEM_ANIMATION: u32 = 54;
pub const ROLE_SYSTEM_EQUATION: u32 = 55;
pub const ROLE_SYSTEM_BUTTONDROPDOWN: u32 = 56;
pub const ROLE_SYSTEM_BUTTONMENU: u32 = 57;
pub const ROLE_SYSTEM_BUTTONDROPDOWNGRID: u32 = 58;
pub const ROLE_SYSTEM_WHITESPACE: u32 = 59;
pub const ROLE_SYSTEM_PAGETABLIST: u32 = 60;
pub const ROLE_SYSTEM_CLOCK: u32 = 61;
pub const ROLE_SYSTEM_SPLITBUTTON: u32 = 62;
pub const ROLE_SYSTEM_IPADDRESS: u32 = 63;
pub const ROLE_SYSTEM_OUTLINEBUTTON: u32 = 64;

// Navigation directions for accNavigate
pub const NAVDIR_UP: i32 = 1;
pub const NAVDIR_DOWN: i32 = 2;
pub const NAVDIR_LEFT: i32 = 3;
pub const NAVDIR_RIGHT: i32 = 4;
pub const NAVDIR_NEXT: i32 = 5;
pub const NAVDIR_PREVIOUS: i32 = 6;
pub const NAVDIR_FIRSTCHILD: i32 = 7;
pub const NAVDIR_LASTCHILD: i32 = 8;

// State bits
pub const STATE_SYSTEM_UNAVAILABLE: u64 = 0x1;
pub const STATE_SYSTEM_SELECTED: u64 = 0x2;
pub const STATE_SYSTEM_FOCUSED: u64 = 0x4;
pub const STATE_SYSTEM_PRESSED: u64 = 0x8;
pub const STATE_SYSTEM_CHECKED: u64 = 0x10;
pub const STATE_SYSTEM_MIXED: u64 = 0x20;
pub const STATE_SYSTEM_READONLY: u64 = 0x40;
pub const STATE_SYSTEM_HOTTRACKED: u64 = 0x80;
pub const STATE_SYSTEM_DEFAULT: u64 = 0x100;
pub const STATE_SYSTEM_EXPANDED: u64 = 0x200;
pub const STATE_SYSTEM_COLLAPSED: u64 = 0x400;
pub const STATE_SYSTEM_BUSY: u64 = 0x800;
pub const STATE_SYSTEM_FLOATING: u64 = 0x1000;
pub const STATE_SYSTEM_MARQUEED: u64 = 0x2000;
pub const STATE_SYSTEM_ANIMATED: u64 = 0x4000;
pub const STATE_SYSTEM_INVISIBLE: u64 = 0x8000;
pub const STATE_SYSTEM_OFFSCREEN: u64 = 0x10000;
pub const STATE_SYSTEM_SIZEABLE: u64 = 0x20000;
pub const STATE_SYSTEM_MOVEABLE: u64 = 0x40000;
pub const STATE_SYSTEM_SELFVOICING: u64 = 0x80000;
pub const STATE_SYSTEM_FOCUSABLE: u64 = 0x100000;
pub const STATE_SYSTEM_SELECTABLE: u64 = 0x200000;
pub const STATE_SYSTEM_LINKED: u64 = 0x400000;
pub const STATE_SYSTEM_TRAVERSED: u64 = 0x800000;
pub const STATE_SYSTEM_MULTISELECTABLE: u64 = 0x1000000;
pub const STATE_SYSTEM_EXTSELECTABLE: u64 = 0x2000000;
pub const STATE_SYSTEM_ALERT_LOW: u64 = 0x4000000;
pub const STATE_SYSTEM_ALERT_MEDIUM: u64 = 0x8000000;
pub const STATE_SYSTEM_ALERT_HIGH: u64 = 0x10000000;
pub const STATE_SYSTEM_PROTECTED: u64 = 0x20000000;
pub const STATE_SYSTEM_HASPOPUP: u64 = 0x40000000;
pub const STATE_SYSTEM_VALID: u64 = 0x7fffffff;

// WinEvent kinds
pub const EVENT_SYSTEM_SOUND: u32 = 0x1;
pub const EVENT_SYSTEM_ALERT: u32 = 0x2;
pub const EVENT_SYSTEM_FOREGROUND: u32 = 0x3;
pub const EVENT_SYSTEM_MENUSTART: u32 = 0x4;
pub const EVENT_SYSTEM_MENUEND: u32 = 0x5;
pub const EVENT_SYSTEM_MENUPOPUPSTART: u32 = 0x6;
pub const EVENT_SYSTEM_MENUPOPUPEND: u32 = 0x7;
pub const EVENT_SYSTEM_CAPTURESTART: u32 = 0x8;
pub const EVENT_SYSTEM_CAPTUREEND: u32 = 0x9;
pub const EVENT_SYSTEM_MOVESIZESTART: u32 = 0xa;
pub const EVENT_SYSTEM_MOVESIZEEND: u32 = 0xb;
pub const EVENT_SYSTEM_CONTEXTHELPSTART: u32 = 0xc;
pub const EVENT_SYSTEM_CONTEXTHELPEND: u32 = 0xd;
pub const EVENT_SYSTEM_DRAGDROPSTART: u32 = 0xe;
pub const EVENT_SYSTEM_DRAGDROPEND: u32 = 0xf;
pub const EVENT_SYSTEM_DIALOGSTART: u32 = 0x10;
pub const EVENT_SYSTEM_DIALOGEND: u32 = 0x11;
pub const EVENT_SYSTEM_SCROLLINGSTART: u32 = 0x12;
pub const EVENT_SYSTEM_SCROLLINGEND: u32 = 0x13;
pub const EVENT_SYSTEM_SWITCHSTART: u32 = 0x14;
pub const EVENT_SYSTEM_SWITCHEND: u32 = 0x15;
pub const EVENT_SYSTEM_MINIMIZESTART: u32 = 0x16;
pub const EVENT_SYSTEM_MINIMIZEEND: u32 = 0x17;
pub const EVENT_CONSOLE_CARET: u32 = 0x4001;
pub const EVENT_CONSOLE_UPDATE_REGION: u32 = 0x4002;
pub const EVENT_CONSOLE_UPDATE_SIMPLE: u32 = 0x4003;
pub const EVENT_CONSOLE_UPDATE_SCROLL: u32 = 0x4004;
pub const EVENT_CONSOLE_LAYOUT: u32 = 0x4005;
pub const EVENT_CONSOLE_START_APPLICATION: u32 = 0x4006;
pub const EVENT_CONSOLE_END_APPLICATION: u32 = 0x4007;
pub const EVENT_OBJECT_CREATE: u32 = 0x8000;
pub const EVENT_OBJECT_DESTROY: u32 = 0x8001;
pub const EVENT_OBJECT_SHOW: u32 = 0x8002;
pub const EVENT_OBJECT_HIDE: u32 = 0x8003;
pub const EVENT_OBJECT_REORDER: u32 = 0x8004;
pub const EVENT_OBJECT_FOCUS: u32 = 0x8005;
pub const EVENT_OBJECT_SELECTION: u32 = 0x8006;
pub const EVENT_OBJECT_SELECTIONADD: u32 = 0x8007;
pub const EVENT_OBJECT_SELECTIONREMOVE: u32 = 0x8008;
pub const EVENT_OBJECT_SELECTIONWITHIN: u32 = 0x8009;
pub const EVENT_OBJECT_STATECHANGE: u32 = 0x800a;
pub const EVENT_OBJECT_LOCATIONCHANGE: u32 = 0x800b;
pub const EVENT_OBJECT_NAMECHANGE: u32 = 0x800c;
pub const EVENT_OBJECT_DESCRIPTIONCHANGE: u32 = 0x800d;
pub const EVENT_OBJECT_VALUECHANGE: u32 = 0x800e;
pub const EVENT_OBJECT_PARENTCHANGE: u32 = 0x800f;
pub const EVENT_OBJECT_HELPCHANGE: u32 = 0x8010;
pub const EVENT_OBJECT_DEFACTIONCHANGE: u32 = 0x8011;
pub const EVENT_OBJECT_ACCELERATORCHANGE: u32 = 0x8012;

// SetWinEventHook flags
pub const WINEVENT_OUTOFCONTEXT: u32 = 0x0000;
pub const WINEVENT_SKIPOWNTHREAD: u32 = 0x0001;
pub const WINEVENT_SKIPOWNPROCESS: u32 = 0x0002;
pub const WINEVENT_INCONTEXT: u32 = 0x0004;
