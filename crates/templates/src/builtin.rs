//! The fixed command table understood by the external macro engine.
//!
//! Entries whose format had fewer slots than declared parameters have been
//! normalised so the registry arity check holds; the engine-side syntax is
//! unchanged for every parameter the editor could actually fill in.

use once_cell::sync::Lazy;

use crate::registry::{TemplateError, TemplateRegistry};
use crate::template::{CommandTemplate, CUSTOM_COMMAND_KEY};

/// The built-in template registry, constructed and validated once.
pub fn builtin() -> &'static TemplateRegistry {
    static BUILTIN: Lazy<TemplateRegistry> =
        Lazy::new(|| build().expect("built-in command table must validate"));
    &BUILTIN
}

fn build() -> Result<TemplateRegistry, TemplateError> {
    let mut registry = TemplateRegistry::new();
    for (key, format, params, description, example) in TABLE {
        let template = CommandTemplate::new(*key, format, params, *description, *example)?;
        let template = if *key == CUSTOM_COMMAND_KEY {
            template.into_passthrough()
        } else {
            template
        };
        registry.insert(template)?;
    }
    Ok(registry)
}

type Row = (
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static str,
    &'static str,
);

#[rustfmt::skip]
const TABLE: &[Row] = &[
    ("Check Spell Use", "!eq % shouldUseSpell{},true", &["Slot Number"],
     "Checks if a spell should be used", "!eq %  shouldUseSpell1,true"),
    ("Check Hotbar", "ch{}, {}", &["Slot Number", "Delay Variable"],
     "Checks if a hotbar slot is ready to use", "ch1, queueDelay"),
    ("Check Range", " {}", &["Range Variable"],
     "Checks a range condition", " inRangedAttackRange"),
    ("Press Key", " spell{}d", &["Spell Number"],
     "Presses a key to cast a spell", " spell1d"),
    ("Store Key", "store % key, spell{}", &["Spell Number"],
     "Stores the key of a spell", "store % key, spell1"),
    ("Go To", "gt{}", &["Line Number"],
     "Jumps to a specific line in the macro", "gt16"),
    ("Equal To", "eq % {},{}", &["Variable", "Value"],
     "If variable equals value", "eq %  mobCount,5"),
    ("Not Equal To", "!eq % {},{}", &["Variable (prefix with VAR if needed", "Value"],
     "Checks if a variable is not equal to a value", "!eq %  mobCount,0"),
    ("Less Than", "cmp % {},{}", &["Value1 (prefix with VAR if needed", "Value2 (prefix with VAR if needed"],
     "Checks if Value1 is less than Value2", "cmp %  playerHP,0.5"),
    ("Greater Than or Equal", "!cmp % {},{}", &["Value1 (prefix with VAR if needed", "Value2 (prefix with VAR if needed"],
     "Checks if Value1 is greater than or equal to Value2", "!cmp %  playerMP,0.7"),
    ("Set Release Timer", "ct % releaseTimer", &[],
     "Checks the release timer", "ct % releaseTimer"),
    ("Store Release Timer", "store % releaseTimer,{}", &["Value"],
     "Stores a value in releaseTimer", "store % releaseTimer,0"),
    ("Random Range", "rand{},{}", &["Min", "Max"],
     "Generates a random number between Min and Max", "rand100,500"),
    ("Multiply Random", "mul % RAND,{}", &["Multiplier"],
     "Multiplies RAND by Multiplier", "mul % RAND,0.001"),
    ("Store Queue Delay", "store % queueDelay, RAND", &[],
     "Stores RAND into queueDelay", "store % queueDelay, RAND"),
    ("Custom Command", "{}", &["Command Text"],
     "Enter a custom command", "your custom command here"),
    ("Hold Key Down", "{}d", &["Key Code"],
     "Holds down the key", "87d"),
    ("Release Key", "{}u", &["Key Code"],
     "Releases the key", "87u"),
    ("Move Mouse", "m{},{}", &["X", "Y"],
     "Moves mouse cursor to (X, Y", "m100,200"),
    ("Random Move Mouse", "rm{}", &["[x1],[y1];[x2],[y2];..."],
     "Randomly moves mouse to one of the specified positions", "rm100,200;150,250"),
    ("Random Key Down", "rkd{},{}", &["Key1", "Key2"],
     "Holds down a random key from the list", "rkd87,65,83"),
    ("Random Key Up", "rku", &[],
     "Releases the key held by the last rkd command", "rku"),
    ("Key Down Conditional", "kd{}", &["Key Code"],
     "If the key is pressed, processes the rest of the line", "kd87|87d|s1000|87u"),
    ("Key Down Physical", "kd*{}", &["Key Code"],
     "Checks if the physical key is pressed", "kd*87|87d|s1000|87u"),
    ("Sleep", "s{}", &["Milliseconds"],
     "Waits for specified milliseconds", "s1000"),
    ("Random Sleep", "rs{},{}", &["Min Milliseconds", "Max Milliseconds"],
     "Waits for a random time between min and max milliseconds", "rs500,1000"),
    ("Set Timer", "st % {},{}", &["Timer Name", "Delay"],
     "Sets a timer", "st % releaseTimer,5000"),
    ("Check Timer", "ct % {}", &["Timer Name"],
     "Checks if the timer has expired", "ct % releaseTimer"),
    ("Camera Angle", "c{}", &["Angle"],
     "Adjusts camera horizontal angle (-180 to 180 degrees", "c90"),
    ("Camera Vertical Angle", "cy{}", &["Angle"],
     "Adjusts camera vertical angle", "cy45"),
    ("If Target is Mob", "it", &[],
     "If targeting a mob, processes the rest of the line", "it|87d|s1000|87u"),
    ("If Being Targeted", "ibt{},{}", &["Type", "Distance"],
     "If being targeted by an entity of type within distance", "ibt1,100"),
    ("Target", "tar", &[],
     "Populates TN (target name and TID (target ID", "tar"),
    ("Target Distance", "td{}", &["Distance"],
     "If current target is within distance", "td100"),
    ("Target Entity", "te{}{}", &["*", "Entity ID"],
     "Targets the entity by ID. Use '*' to also rotate camera toward the entity", "te*12345"),
    ("Target Closest Mob", "tcm{}{},{}", &["*", "Max Distance", "Max Height"],
     "Targets closest mob. Use '*' to rotate camera", "tcm*100,50"),
    ("Target Closest Player", "tcp{}{},{},{}", &["*", "Max Distance", "Max Height", "Type"],
     "Targets closest player. Type: 0 any, 1 enemy, 2 friendly", "tcp*100,50,1"),
    ("Target Mob with Lowest HP", "tmhp{}{},{}", &["*", "Distance", "Max Height"],
     "Targets mob with lowest HP. Use '*' to rotate camera", "tmhp*100,50"),
    ("Target Player with Lowest HP", "tphp{}{},{}", &["*", "Distance", "Max Height"],
     "Targets player with lowest HP. Use '*' to rotate camera", "tphp*100,50"),
    ("Target Player with Weapon", "tcpw{}{},{}", &["*", "Distance", "Weapon ID"],
     "Targets player with specified weapon. Use '*' to rotate camera", "tcpw*100,40438765"),
    ("Target Entity by Name", "tce % {}{},{},{}", &["*", "Entity Name", "Distance", "Max Height"],
     "Targets entity by name. Use '*' to rotate camera", "tce % *Enemy Name,100,50"),
    ("Lock Target", "lt", &[],
     "Locks camera to current target", "lt"),
    ("Unlock Target", "lt-", &[],
     "Unlocks camera", "lt-"),
    ("Ignore Players", "ign{}{}", &["-", "Distance"],
     "Sets nearby players as allies or resets the list. Use '-' to reset", "ign100"),
    ("Rotate Camera to Target", "tct", &[],
     "Rotates camera toward current target", "tct"),
    ("Target Previous Target", "tpt{}", &["*"],
     "Targets previous target if none selected. Use '*' to rotate camera", "tpt*"),
    ("Health Percentage", "hp{}", &["Percent"],
     "If HP \u{2264} percent (0 to 1", "hp0.5"),
    ("Mana Percentage", "mp{}", &["Percent"],
     "If MP \u{2264} percent (0 to 1", "mp0.3"),
    ("Stamina Percentage", "sta{}", &["Percent"],
     "If stamina \u{2264} percent (0 to 1", "sta0.8"),
    ("Player Status Effect", "pse{},{}", &["Status Effect ID", "Stacks"],
     "If status effect is active", "pse123,1"),
    ("Is Attacking", "ia", &[],
     "If currently attacking", "ia"),
    ("Current Attack", "att{}", &["Attack ID"],
     "If current attack matches attack ID", "att456"),
    ("Check Hotbar Slot", "ch{},{}", &["Hotbar Slot", "Timer"],
     "If ability is ready or near ready", "ch1,500"),
    ("Wait for Hotbar Slot", "ch*{},{}", &["Hotbar Slot", "Timeout"],
     "Waits until ability is on cooldown or times out", "ch*1,5000"),
    ("Check Hotbar ID", "chid{},{}", &["Hotbar Slot", "Ability ID"],
     "Checks if ability ID matches", "chid1,789"),
    ("Weapon Number", "wpn{}", &["Weapon Number"],
     "If active weapon is 1 or 2", "wpn1"),
    ("Weapon ID", "wpn*{}", &["Weapon ID"],
     "If equipped weapon matches ID", "wpn*40438765"),
    ("Move To Coordinates", "mt{},{},{}", &["X", "Y", "Z"],
     "Moves character to coordinates", "mt1000,2000,300"),
    ("Move Toward Mob", "mtm % {},{},{},{}", &["Name", "Distance", "Angle", "How Far"],
     "Moves toward mob", "mtm % Goblin,100,90,50"),
    ("Movement Speed", "ms{}", &["Movement Speed"],
     "Sets movement speed increase", "ms1.5"),
    ("Load Waymark File", "lwf % {}", &["Filename.ini"],
     "Loads waymark file", "lwf % waymarks.ini"),
    ("Check Nearby Mobs", "cnm{},{}{},{}", &["Number", "Distance", "Max Height", "(X,(Y,(Z"],
     "Checks for nearby mobs", "cnm5,100,50"),
    ("Check Mobs Around Target", "ctnm{},{}", &["Number", "Distance"],
     "Checks mobs around the target", "ctnm5,100"),
    ("Check Mobs with HP", "cmhp{},{}", &["Percent", "Distance"],
     "Checks mobs with HP \u{2264} percent", "cmhp0.5,100"),
    ("Check Players with HP", "cphp{},{}", &["Percent", "Distance"],
     "Checks players with HP \u{2264} percent", "cphp0.5,100"),
    ("Check Target HP", "cthp{}", &["Percent"],
     "Checks if target's HP \u{2264} percent", "cthp0.5"),
    ("Check Players with Weapon", "cnpw{},{},{}", &["Number", "Distance", "Weapon ID"],
     "Checks for players with weapon ID", "cnpw5,100,40438765"),
    ("Check Target's Status Effects", "cts{},{},{}", &["Status Effect ID", "Stacks", "Remaining Duration"],
     "Checks target's status effects", "cts123,1,5000"),
    ("Check Target's Weapon", "ctw{}{}", &["*", "Weapon ID"],
     "Checks target's weapon. Use '*' to rotate camera", "ctw*40438765"),
    ("Check Entity by Name", "cne % {},{},{}", &["Entity Name", "Distance", "Max Height"],
     "Checks for entity by name", "cne % Goblin,100,50"),
    ("Call Function", "call % {}", &["Function Name"],
     "Calls a defined function", "call % myFunction"),
    ("Go To Line", "gt{}", &["Line Number"],
     "Jumps to waymark index or macro keys section", "gt16"),
    ("Toggle Macro Key", "to{}", &["Macro Key"],
     "Toggles a macro", "toF3"),
    ("Random Number", "rand{},{}", &["Min", "Max"],
     "Generates a random number into RAND", "rand1,100"),
    ("Compare Less Than", "cmp{},{}", &["Value1", "Value2"],
     "If Value1 < Value2", "cmp playerHP,0.5"),
    ("Store Variable", "store % {},{}", &["Variable", "Value"],
     "Stores value in a variable", "store % queueDelay,500"),
    ("Retrieve Variable", " {}", &["Variable"],
     "Retrieves variable's value", " queueDelay"),
    ("Logical OR", "or % ({}({}...", &["Command1", "Command2"],
     "Logical OR between commands", "or % (eq %  mobCount,5(eq %  mobCount,10"),
    ("Add", "add % {},{}", &["Variable", "Value"],
     "Adds value to variable", "add % mobCount,1"),
    ("Subtract", "sub % {},{}", &["Variable", "Value"],
     "Subtracts value from variable", "sub % mobCount,1"),
    ("Multiply", "mul % {},{}", &["Variable", "Value"],
     "Multiplies variable by value", "mul % RAND,0.001"),
    ("Divide", "div % {},{}", &["Variable", "Value"],
     "Divides variable by value", "div % totalDamage,2"),
    ("Debug Message", "dbg % {}", &["Text"],
     "Outputs text to console", "dbg % 'Debug message here'"),
    ("Console Command", "cc % {}", &["Console Command"],
     "Executes a console command", "cc % -cl"),
    ("Get Pixel Color", "gp{},{}{},{}", &["X", "Y", "Color", "Precision"],
     "Checks pixel color at coordinates", "gp100,200,16777215,0"),
    ("No Operation", "nop", &[],
     "No operation (placeholder", "nop"),
    ("Config Line", "conf % {},{}", &["Line", "Text"],
     "Writes text to a line in config.txt", "conf % 1,113"),
];
