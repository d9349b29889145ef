use std::sync::LazyLock;

use wellpath_core::models::kind::AssessmentKind;
use wellpath_core::models::question::QuestionRecord;

use crate::QuestionBank;

/// Baseline mental-health literacy check taken before the program starts.
/// 30 single-answer items, no sections.
pub struct PreTest;

impl QuestionBank for PreTest {
    fn kind(&self) -> AssessmentKind {
        AssessmentKind::PreTest
    }

    fn name(&self) -> &str {
        "Pre-Test"
    }

    fn questions(&self) -> &'static [QuestionRecord] {
        static QUESTIONS: LazyLock<Vec<QuestionRecord>> = LazyLock::new(|| {
            vec![
                q("Mental health is best described as:", &["The absence of any mental illness", "A state of well-being in which a person can cope with normal stresses of life", "Being happy all the time", "Never feeling sad or angry"], 1),
                q("Which of these is a common early sign of depression in teenagers?", &["Increased appetite for sweets only", "Loss of interest in activities they used to enjoy", "Wanting to spend more time with friends", "Improved school grades"], 1),
                q("Anxiety that is strong enough to interfere with daily life:", &["Is just a sign of a weak character", "Can be treated and managed", "Always goes away on its own within a day", "Only affects adults"], 1),
                q("Who can a student first talk to at school about a mental health concern?", &["Only the principal", "The school counselor", "No one, it should be kept private", "Only a classmate"], 1),
                q("Stigma around mental illness most often leads people to:", &["Seek help sooner", "Avoid seeking help", "Talk about their feelings more openly", "Visit a doctor more often"], 1),
                q("Which of these is a healthy way to cope with stress?", &["Skipping meals", "Regular physical activity", "Staying awake all night", "Isolating from everyone"], 1),
                q("How many hours of sleep do most teenagers need each night?", &["4 to 5 hours", "8 to 10 hours", "12 to 14 hours", "Sleep needs do not matter at this age"], 1),
                q("If a friend talks about wanting to die, you should:", &["Keep it a secret as they asked", "Tell a trusted adult right away", "Change the subject", "Wait and see if they mention it again"], 1),
                q("Mental illnesses are caused by:", &["Personal weakness", "A mix of biological, psychological and social factors", "Bad luck only", "Eating the wrong food"], 1),
                q("Bullying can affect a student's mental health by:", &["Making them more confident", "Increasing the risk of anxiety and depression", "Having no lasting effect", "Improving their social skills"], 1),
                q("Panic attacks typically include:", &["A slow heartbeat and calm breathing", "A racing heart, shortness of breath and intense fear", "Feeling sleepy", "Sudden hunger"], 1),
                q("Self-harm is best understood as:", &["Attention seeking that should be ignored", "A sign of distress that needs support", "A normal part of growing up", "Something only girls do"], 1),
                q("Which professional can diagnose a mental disorder?", &["A sports coach", "A psychiatrist or clinical psychologist", "Any teacher", "A pharmacist at the counter"], 1),
                q("Talking about mental health with a friend:", &["Makes the problem worse", "Can help them feel less alone", "Should be avoided at school", "Is only for adults"], 1),
                q("Excessive use of social media can be linked to:", &["Better sleep", "Poorer mood and sleep problems", "Higher exam scores", "No change in well-being"], 1),
                q("A person with depression can usually:", &["Just snap out of it", "Improve with proper treatment and support", "Never get better", "Only be helped by medicine"], 1),
                q("Which is a warning sign that someone may be struggling?", &["Giving away valued belongings", "Planning a holiday", "Joining a new club", "Laughing with friends"], 0),
                q("Substance use to cope with feelings:", &["Is a safe long-term strategy", "Can make mental health problems worse", "Has no effect on mood", "Is recommended by doctors"], 1),
                q("Resilience means:", &["Never experiencing hardship", "The ability to adapt and recover from difficulties", "Hiding your emotions", "Always winning"], 1),
                q("Eating disorders:", &["Are a lifestyle choice", "Are serious illnesses that can affect anyone", "Only affect people who are underweight", "Are not related to mental health"], 1),
                q("Confidentiality with a counselor means:", &["Everything is shared with classmates", "What you say is kept private unless someone's safety is at risk", "Your parents are always told everything", "Nothing is ever written down"], 1),
                q("Exam stress is best handled by:", &["Cramming the night before", "Planning study time and taking breaks", "Avoiding all revision", "Drinking lots of energy drinks"], 1),
                q("Loneliness over a long period:", &["Has no effect on health", "Can increase the risk of mental health problems", "Always improves grades", "Only affects older people"], 1),
                q("Mindfulness exercises aim to:", &["Empty the mind of all thoughts forever", "Help focus attention on the present moment", "Replace the need for sleep", "Cure every illness"], 1),
                q("Which statement about medication for mental illness is correct?", &["It is always addictive", "It should be taken as prescribed by a doctor", "It works instantly", "It can be shared with friends"], 1),
                q("Grief after losing someone:", &["Must be over within a week", "Is a natural response that varies from person to person", "Is a mental illness", "Should never be talked about"], 1),
                q("A supportive response to a friend who is upset is:", &["\"Just get over it\"", "\"I am here for you, do you want to talk?\"", "\"Other people have it worse\"", "\"Stop being dramatic\""], 1),
                q("Helplines for emotional support are:", &["Only for emergencies involving the police", "Available to anyone who needs to talk", "Expensive to call", "Only for adults"], 1),
                q("Physical symptoms such as headaches and stomach aches can be linked to:", &["Stress and anxiety", "Good mental health", "Too much sleep only", "Nothing related to emotions"], 0),
                q("Seeking help for a mental health concern is a sign of:", &["Weakness", "Strength and self-care", "Failure", "Laziness"], 1),
            ]
        });
        &QUESTIONS
    }
}

fn q(text: &str, options: &[&str], correct: usize) -> QuestionRecord {
    QuestionRecord::choice(text, options, correct)
}
