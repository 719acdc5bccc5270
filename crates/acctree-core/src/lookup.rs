//! Unlocalized names for roles, state bits and WinEvent kinds.

use crate::constants::*;

/// Name used for role codes and state bits missing from the static tables.
pub const UNKNOWN_NAME: &str = "unknown";

/// Unlocalized name of a role code.
pub fn role_name(role: u32) -> Option<&'static str> {
    let name = match role {
        ROLE_SYSTEM_TITLEBAR => "title bar",
        ROLE_SYSTEM_MENUBAR => "menu bar",
        ROLE_SYSTEM_SCROLLBAR => "scroll bar",
        ROLE_SYSTEM_GRIP => "grip",
        ROLE_SYSTEM_SOUND => "sound",
        ROLE_SYSTEM_CURSOR => "cursor",
        ROLE_SYSTEM_CARET => "caret",
        ROLE_SYSTEM_ALERT => "alert",
        ROLE_SYSTEM_WINDOW => "window",
        ROLE_SYSTEM_CLIENT => "client",
        ROLE_SYSTEM_MENUPOPUP => "popup menu",
        ROLE_SYSTEM_MENUITEM => "menu item",
        ROLE_SYSTEM_TOOLTIP => "tool tip",
        ROLE_SYSTEM_APPLICATION => "application",
        ROLE_SYSTEM_DOCUMENT => "document",
        ROLE_SYSTEM_PANE => "pane",
        ROLE_SYSTEM_CHART => "chart",
        ROLE_SYSTEM_DIALOG => "dialog",
        ROLE_SYSTEM_BORDER => "border",
        ROLE_SYSTEM_GROUPING => "grouping",
        ROLE_SYSTEM_SEPARATOR => "separator",
        ROLE_SYSTEM_TOOLBAR => "tool bar",
        ROLE_SYSTEM_STATUSBAR => "status bar",
        ROLE_SYSTEM_TABLE => "table",
        ROLE_SYSTEM_COLUMNHEADER => "column header",
        ROLE_SYSTEM_ROWHEADER => "row header",
        ROLE_SYSTEM_COLUMN => "column",
        ROLE_SYSTEM_ROW => "row",
        ROLE_SYSTEM_CELL => "cell",
        ROLE_SYSTEM_LINK => "link",
        ROLE_SYSTEM_HELPBALLOON => "help balloon",
        ROLE_SYSTEM_CHARACTER => "character",
        ROLE_SYSTEM_LIST => "list",
        ROLE_SYSTEM_LISTITEM => "list item",
        ROLE_SYSTEM_OUTLINE => "outline",
        ROLE_SYSTEM_OUTLINEITEM => "outline item",
        ROLE_SYSTEM_PAGETAB => "page tab",
        ROLE_SYSTEM_PROPERTYPAGE => "property page",
        ROLE_SYSTEM_INDICATOR => "indicator",
        ROLE_SYSTEM_GRAPHIC => "graphic",
        ROLE_SYSTEM_STATICTEXT => "text",
        ROLE_SYSTEM_TEXT => "editable text",
        ROLE_SYSTEM_PUSHBUTTON => "push button",
        ROLE_SYSTEM_CHECKBUTTON => "check box",
        ROLE_SYSTEM_RADIOBUTTON => "radio button",
        ROLE_SYSTEM_COMBOBOX => "combo box",
        ROLE_SYSTEM_DROPLIST => "drop down",
        ROLE_SYSTEM_PROGRESSBAR => "progress bar",
        ROLE_SYSTEM_DIAL => "dial",
        ROLE_SYSTEM_HOTKEYFIELD => "hot key field",
        ROLE_SYSTEM_SLIDER => "slider",
        ROLE_SYSTEM_SPINBUTTON => "spin box",
        ROLE_SYSTEM_DIAGRAM => "diagram",
        ROLE_SYSTEM_ANIMATION => "animation",
        ROLE_SYSTEM_EQUATION => "equation",
        ROLE_SYSTEM_BUTTONDROPDOWN => "drop down button",
        ROLE_SYSTEM_BUTTONMENU => "menu button",
        ROLE_SYSTEM_BUTTONDROPDOWNGRID => "grid drop down button",
        ROLE_SYSTEM_WHITESPACE => "white space",
        ROLE_SYSTEM_PAGETABLIST => "page tab list",
        ROLE_SYSTEM_CLOCK => "clock",
        ROLE_SYSTEM_SPLITBUTTON => "split button",
        ROLE_SYSTEM_IPADDRESS => "ip address",
        ROLE_SYSTEM_OUTLINEBUTTON => "outline button",
        _ => return None,
    };
    Some(name)
}

/// Unlocalized name of a single state bit.
///
/// `bit` must have exactly one bit set; combined masks return `None`.
pub fn state_name(bit: u64) -> Option<&'static str> {
    let name = match bit {
        STATE_SYSTEM_UNAVAILABLE => "unavailable",
        STATE_SYSTEM_SELECTED => "selected",
        STATE_SYSTEM_FOCUSED => "focused",
        STATE_SYSTEM_PRESSED => "pressed",
        STATE_SYSTEM_CHECKED => "checked",
        STATE_SYSTEM_MIXED => "mixed",
        STATE_SYSTEM_READONLY => "read only",
        STATE_SYSTEM_HOTTRACKED => "hot tracked",
        STATE_SYSTEM_DEFAULT => "default",
        STATE_SYSTEM_EXPANDED => "expanded",
        STATE_SYSTEM_COLLAPSED => "collapsed",
        STATE_SYSTEM_BUSY => "busy",
        STATE_SYSTEM_FLOATING => "floating",
        STATE_SYSTEM_MARQUEED => "marqueed",
        STATE_SYSTEM_ANIMATED => "animated",
        STATE_SYSTEM_INVISIBLE => "invisible",
        STATE_SYSTEM_OFFSCREEN => "offscreen",
        STATE_SYSTEM_SIZEABLE => "sizeable",
        STATE_SYSTEM_MOVEABLE => "moveable",
        STATE_SYSTEM_SELFVOICING => "self voicing",
        STATE_SYSTEM_FOCUSABLE => "focusable",
        STATE_SYSTEM_SELECTABLE => "selectable",
        STATE_SYSTEM_LINKED => "linked",
        STATE_SYSTEM_TRAVERSED => "traversed",
        STATE_SYSTEM_MULTISELECTABLE => "multi selectable",
        STATE_SYSTEM_EXTSELECTABLE => "extended selectable",
        STATE_SYSTEM_ALERT_LOW => "alert low",
        STATE_SYSTEM_ALERT_MEDIUM => "alert medium",
        STATE_SYSTEM_ALERT_HIGH => "alert high",
        STATE_SYSTEM_PROTECTED => "protected",
        STATE_SYSTEM_HASPOPUP => "has popup",
        _ => return None,
    };
    Some(name)
}

/// Short display name of a WinEvent kind.
pub fn event_name(kind: u32) -> Option<&'static str> {
    let name = match kind {
        EVENT_SYSTEM_SOUND => "sound",
        EVENT_SYSTEM_ALERT => "alert",
        EVENT_SYSTEM_FOREGROUND => "foreground",
        EVENT_SYSTEM_MENUSTART => "menuStart",
        EVENT_SYSTEM_MENUEND => "menuEnd",
        EVENT_SYSTEM_MENUPOPUPSTART => "menuPopupStart",
        EVENT_SYSTEM_MENUPOPUPEND => "menuPopupEnd",
        EVENT_SYSTEM_CAPTURESTART => "captureStart",
        EVENT_SYSTEM_CAPTUREEND => "captureEnd",
        EVENT_SYSTEM_MOVESIZESTART => "moveSizeStart",
        EVENT_SYSTEM_MOVESIZEEND => "moveSizeEnd",
        EVENT_SYSTEM_CONTEXTHELPSTART => "contextHelpStart",
        EVENT_SYSTEM_CONTEXTHELPEND => "contextHelpEnd",
        EVENT_SYSTEM_DRAGDROPSTART => "dragDropStart",
        EVENT_SYSTEM_DRAGDROPEND => "dragDropEnd",
        EVENT_SYSTEM_DIALOGSTART => "dialogStart",
        EVENT_SYSTEM_DIALOGEND => "dialogEnd",
        EVENT_SYSTEM_SCROLLINGSTART => "scrollingStart",
        EVENT_SYSTEM_SCROLLINGEND => "scrollingEnd",
        EVENT_SYSTEM_SWITCHSTART => "switchStart",
        EVENT_SYSTEM_SWITCHEND => "switchEnd",
        EVENT_SYSTEM_MINIMIZESTART => "minimizeStart",
        EVENT_SYSTEM_MINIMIZEEND => "minimizeEnd",
        EVENT_CONSOLE_CARET => "consoleCaret",
        EVENT_CONSOLE_UPDATE_REGION => "consoleUpdateRegion",
        EVENT_CONSOLE_UPDATE_SIMPLE => "consoleUpdateSimple",
        EVENT_CONSOLE_UPDATE_SCROLL => "consoleUpdateScroll",
        EVENT_CONSOLE_LAYOUT => "consoleLayout",
        EVENT_CONSOLE_START_APPLICATION => "consoleStartApplication",
        EVENT_CONSOLE_END_APPLICATION => "consoleEndApplication",
        EVENT_OBJECT_CREATE => "create",
        EVENT_OBJECT_DESTROY => "destroy",
        EVENT_OBJECT_SHOW => "show",
        EVENT_OBJECT_HIDE => "hide",
        EVENT_OBJECT_REORDER => "reorder",
        EVENT_OBJECT_FOCUS => "gainFocus",
        EVENT_OBJECT_SELECTION => "selection",
        EVENT_OBJECT_SELECTIONADD => "selectionAdd",
        EVENT_OBJECT_SELECTIONREMOVE => "selectionRemove",
        EVENT_OBJECT_SELECTIONWITHIN => "selectionWithIn",
        EVENT_OBJECT_STATECHANGE => "stateChange",
        EVENT_OBJECT_LOCATIONCHANGE => "locationChange",
        EVENT_OBJECT_NAMECHANGE => "nameChange",
        EVENT_OBJECT_DESCRIPTIONCHANGE => "descriptionChange",
        EVENT_OBJECT_VALUECHANGE => "valueChange",
        EVENT_OBJECT_PARENTCHANGE => "parentChange",
        EVENT_OBJECT_HELPCHANGE => "helpChange",
        EVENT_OBJECT_DEFACTIONCHANGE => "defaultActionChange",
        EVENT_OBJECT_ACCELERATORCHANGE => "acceleratorChange",
        _ => return None,
    };
    Some(name)
}

/// Single-bit masks of every set bit in `state`, lowest first.
pub fn set_bits(state: u64) -> impl Iterator<Item = u64> {
    (0..64)
        .map(|shift| 1u64 << shift)
        .filter(move |bit| state & bit != 0)
}
