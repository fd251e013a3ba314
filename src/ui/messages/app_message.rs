use crate::domain::entities::language::Language;
use crate::ui::messages::details_message::DetailsMessage;
use crate::ui::messages::videos_message::VideosMessage;

#[derive(Clone, Debug)]
pub enum AppMessage {
    ChangeLanguage(Language),
    Videos(VideosMessage),
    Details(DetailsMessage),
    TabPressed { shift: bool },
    RetryPressed,
    EscapePressed,
}
